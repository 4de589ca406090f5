use palette::Srgba;
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

/// Keys of the three colors a dial asks for at construction.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, StrumDisplay, AsRefStr,
)]
pub enum ColorId {
    #[strum(serialize = "background_color")]
    Background,
    #[strum(serialize = "marker_color")]
    Marker,
    #[strum(serialize = "text_color")]
    Text,
}

/// Keys of the localized cardinal direction labels.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, StrumDisplay, AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum StringId {
    CardinalNorth,
    CardinalEast,
    CardinalSouth,
    CardinalWest,
}

/// Source of colors and strings, queried only while a dial is being built.
pub trait ResourceProvider {
    fn color(&self, id: ColorId) -> Srgba<f64>;
    fn string(&self, id: StringId) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, StrumDisplay)]
pub enum Cardinal {
    North,
    East,
    South,
    West,
}

impl Cardinal {
    /// Maps a 15° loop step onto the cardinal drawn there, if any.
    pub fn from_step(step: usize) -> Option<Self> {
        match step {
            0 => Some(Self::North),
            6 => Some(Self::East),
            12 => Some(Self::South),
            18 => Some(Self::West),
            _ => None,
        }
    }

    pub fn string_id(&self) -> StringId {
        match self {
            Self::North => StringId::CardinalNorth,
            Self::East => StringId::CardinalEast,
            Self::South => StringId::CardinalSouth,
            Self::West => StringId::CardinalWest,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardinalLabels {
    pub north: String,
    pub east: String,
    pub south: String,
    pub west: String,
}

impl CardinalLabels {
    pub fn resolve(resources: &impl ResourceProvider) -> Self {
        Self {
            north: resources.string(StringId::CardinalNorth),
            east: resources.string(StringId::CardinalEast),
            south: resources.string(StringId::CardinalSouth),
            west: resources.string(StringId::CardinalWest),
        }
    }

    pub fn get(&self, cardinal: Cardinal) -> &str {
        match cardinal {
            Cardinal::North => &self.north,
            Cardinal::East => &self.east,
            Cardinal::South => &self.south,
            Cardinal::West => &self.west,
        }
    }
}

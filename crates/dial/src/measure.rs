/// Side length claimed on an axis the host leaves unconstrained.
pub const DEFAULT_SIZE: i32 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureMode {
    Exact,
    AtMost,
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisConstraint {
    pub mode: MeasureMode,
    pub size: i32,
}

impl AxisConstraint {
    pub fn new(mode: MeasureMode, size: i32) -> Self {
        Self { mode, size }
    }

    pub fn exact(size: i32) -> Self {
        Self::new(MeasureMode::Exact, size)
    }

    pub fn at_most(size: i32) -> Self {
        Self::new(MeasureMode::AtMost, size)
    }

    pub fn unspecified() -> Self {
        Self::new(MeasureMode::Unspecified, 0)
    }

    /// A bounded axis is always claimed in full; sizes are not validated.
    pub fn resolve(&self) -> i32 {
        match self.mode {
            MeasureMode::Unspecified => DEFAULT_SIZE,
            MeasureMode::Exact | MeasureMode::AtMost => self.size,
        }
    }
}

pub fn negotiate_size(width: AxisConstraint, height: AxisConstraint) -> (i32, i32) {
    let side = width.resolve().min(height.resolve());
    (side, side)
}

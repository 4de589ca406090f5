use std::fmt;
use std::num::ParseFloatError;
use std::str::FromStr;
use strum::{Display as StrumDisplay, EnumString};
use thiserror::Error;

use crate::events::AppEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, StrumDisplay)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
enum Keyword {
    Show,
    Hide,
    Bearing,
}

/// One line of the control socket protocol.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Show,
    Hide,
    Bearing(f64),
}

#[derive(Error, Debug, PartialEq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command '{0}'")]
    Unknown(String),
    #[error("Missing bearing value")]
    MissingBearing,
    #[error("Invalid bearing '{0}': {1}")]
    InvalidBearing(String, ParseFloatError),
    #[error("Bearing must be finite, got {0}")]
    NonFiniteBearing(f64),
    #[error("Unexpected argument '{0}'")]
    TrailingArgument(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let head = words.next().ok_or(CommandError::Empty)?;
        let keyword =
            Keyword::from_str(head).map_err(|_| CommandError::Unknown(head.to_string()))?;

        let command = match keyword {
            Keyword::Show => Command::Show,
            Keyword::Hide => Command::Hide,
            Keyword::Bearing => {
                let value = words.next().ok_or(CommandError::MissingBearing)?;
                let bearing: f64 = value
                    .parse()
                    .map_err(|e| CommandError::InvalidBearing(value.to_string(), e))?;
                if !bearing.is_finite() {
                    return Err(CommandError::NonFiniteBearing(bearing));
                }
                Command::Bearing(bearing)
            }
        };

        match words.next() {
            Some(extra) => Err(CommandError::TrailingArgument(extra.to_string())),
            None => Ok(command),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Show => write!(f, "{}", Keyword::Show),
            Command::Hide => write!(f, "{}", Keyword::Hide),
            Command::Bearing(bearing) => write!(f, "{} {:?}", Keyword::Bearing, bearing),
        }
    }
}

impl From<Command> for AppEvent {
    fn from(command: Command) -> Self {
        match command {
            Command::Show => AppEvent::Show,
            Command::Hide => AppEvent::Hide,
            Command::Bearing(bearing) => AppEvent::SetBearing(bearing),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        let cases = vec![
            ("show", Command::Show),
            ("  HIDE ", Command::Hide),
            ("bearing 90", Command::Bearing(90.0)),
            ("bearing -725.5", Command::Bearing(-725.5)),
            ("Bearing\t1e3", Command::Bearing(1000.0)),
        ];

        for (line, expected) in cases {
            assert_eq!(line.parse::<Command>().unwrap(), expected);
        }
    }

    #[test]
    fn test_reject_malformed_lines() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!(
            "spin 90".parse::<Command>(),
            Err(CommandError::Unknown("spin".to_string()))
        );
        assert_eq!(
            "bearing".parse::<Command>(),
            Err(CommandError::MissingBearing)
        );
        assert!(matches!(
            "bearing north".parse::<Command>(),
            Err(CommandError::InvalidBearing(v, _)) if v == "north"
        ));
        for line in ["bearing NaN", "bearing inf", "bearing -infinity"] {
            assert!(matches!(
                line.parse::<Command>(),
                Err(CommandError::NonFiniteBearing(_))
            ));
        }
        assert_eq!(
            "show now".parse::<Command>(),
            Err(CommandError::TrailingArgument("now".to_string()))
        );
    }

    #[test]
    fn test_written_command_parses_back() {
        let command = Command::Bearing(12.25);
        assert_eq!(command.to_string(), "bearing 12.25");
        assert_eq!(command.to_string().parse::<Command>(), Ok(command));
        assert_eq!(AppEvent::from(command), AppEvent::SetBearing(12.25));
    }
}

use std::fmt;
use std::str::FromStr;

use crate::PlaneStegoError;

/// Color channel whose plane carries the hidden payload.
///
/// Frames are laid out in blue, green, red order, so the discriminant is
/// also the index of the channel inside one pixel.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum Channel {
    Blue = 0,
    Green = 1,
    #[default]
    Red = 2,
}

impl Channel {
    pub fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<u8> for Channel {
    type Error = PlaneStegoError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Channel::Blue),
            1 => Ok(Channel::Green),
            2 => Ok(Channel::Red),
            _ => Err(PlaneStegoError::InvalidChannel(value)),
        }
    }
}

impl FromStr for Channel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "b" | "blue" | "0" => Ok(Channel::Blue),
            "g" | "green" | "1" => Ok(Channel::Green),
            "r" | "red" | "2" => Ok(Channel::Red),
            other => Err(format!(
                "unknown channel '{other}', expected one of b, g, r"
            )),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Channel::Blue => "blue",
            Channel::Green => "green",
            Channel::Red => "red",
        };
        f.write_str(name)
    }
}

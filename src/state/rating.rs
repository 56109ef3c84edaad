//! Satisfaction rating values

use serde::{Deserialize, Serialize};

/// Emoji satisfaction rating, serialized as its numeric value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Rating {
    Unsatisfied = 1,
    Neutral = 2,
    Satisfied = 3,
}

impl Rating {
    /// All ratings in picker order
    pub const ALL: [Rating; 3] = [Rating::Unsatisfied, Rating::Neutral, Rating::Satisfied];

    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::Unsatisfied),
            2 => Some(Self::Neutral),
            3 => Some(Self::Satisfied),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Unsatisfied => "Unsatisfied",
            Self::Neutral => "Neutral",
            Self::Satisfied => "Satisfied",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::Unsatisfied => "😞",
            Self::Neutral => "😐",
            Self::Satisfied => "😊",
        }
    }

    /// Next rating to the right, wrapping around
    pub fn next(self) -> Self {
        match self {
            Self::Unsatisfied => Self::Neutral,
            Self::Neutral => Self::Satisfied,
            Self::Satisfied => Self::Unsatisfied,
        }
    }

    /// Previous rating to the left, wrapping around
    pub fn prev(self) -> Self {
        match self {
            Self::Unsatisfied => Self::Satisfied,
            Self::Neutral => Self::Unsatisfied,
            Self::Satisfied => Self::Neutral,
        }
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.value()
    }
}

impl TryFrom<u8> for Rating {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rating::from_value(value).ok_or_else(|| format!("invalid rating: {value}"))
    }
}

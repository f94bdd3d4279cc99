use serde::{Deserialize, Serialize};

/// One of the two symbols a player places on the board.
///
/// A `Mark` is not tied to a seat: the same mark may be played by a human or
/// by the AI depending on session setup, and the search layer is told which
/// mark it is optimizing for on each call.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::FromStr,
)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Returns the other mark.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }

    /// Returns the character used when rendering this mark.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::X => 'X',
            Self::O => 'O',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involutive() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
        assert_eq!(Mark::X.opponent().opponent(), Mark::X);
    }

    #[test]
    fn test_display_and_char() {
        assert_eq!(Mark::X.to_string(), "X");
        assert_eq!(Mark::O.to_string(), "O");
        assert_eq!(Mark::X.as_char(), 'X');
        assert_eq!(Mark::O.as_char(), 'O');
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("X".parse::<Mark>().unwrap(), Mark::X);
        assert_eq!("x".parse::<Mark>().unwrap(), Mark::X);
        assert_eq!("o".parse::<Mark>().unwrap(), Mark::O);
        assert!("q".parse::<Mark>().is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&Mark::O).unwrap();
        assert_eq!(json, "\"O\"");
        let mark: Mark = serde_json::from_str(&json).unwrap();
        assert_eq!(mark, Mark::O);
    }
}

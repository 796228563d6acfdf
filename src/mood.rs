//! Humor del jefe, del cual depende si el barista atiende o no.
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Mood {
    Good,
    Bad,
    BetterStayAway,
}

impl Mood {
    #[cfg(test)]
    pub const ALL: [Mood; 3] = [Mood::Good, Mood::Bad, Mood::BetterStayAway];

    pub fn name(&self) -> &'static str {
        match self {
            Mood::Good => "GOOD",
            Mood::Bad => "BAD",
            Mood::BetterStayAway => "BETTER_STAY_AWAY",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_the_mood_name() {
        assert_eq!("GOOD", Mood::Good.to_string());
        assert_eq!("BAD", Mood::Bad.to_string());
        assert_eq!("BETTER_STAY_AWAY", Mood::BetterStayAway.to_string());
    }

    #[test]
    fn should_deserialize_the_mood_from_its_name() {
        let mood: Mood = serde_json::from_str("\"BETTER_STAY_AWAY\"").unwrap();
        assert_eq!(Mood::BetterStayAway, mood);
    }

    #[test]
    fn should_fail_to_deserialize_an_unknown_mood() {
        let mood: Result<Mood, _> = serde_json::from_str("\"GRUMPY\"");
        assert_eq!(true, mood.is_err());
    }
}

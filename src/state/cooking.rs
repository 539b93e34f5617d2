//! Egg sizes, doneness levels and the cook-time table

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Size of the egg being cooked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EggSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl EggSize {
    pub const ALL: [EggSize; 3] = [EggSize::Small, EggSize::Medium, EggSize::Large];

    pub fn as_str(&self) -> &'static str {
        match self {
            EggSize::Small => "small",
            EggSize::Medium => "medium",
            EggSize::Large => "large",
        }
    }

    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            EggSize::Small => "Small",
            EggSize::Medium => "Medium",
            EggSize::Large => "Large",
        }
    }
}

impl fmt::Display for EggSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EggSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "small" => Ok(EggSize::Small),
            "medium" => Ok(EggSize::Medium),
            "large" => Ok(EggSize::Large),
            other => Err(format!(
                "Unknown egg size '{}', expected one of: small, medium, large",
                other
            )),
        }
    }
}

/// Target firmness of the cooked egg
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Doneness {
    Soft,
    #[default]
    Medium,
    Hard,
}

impl Doneness {
    pub const ALL: [Doneness; 3] = [Doneness::Soft, Doneness::Medium, Doneness::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Doneness::Soft => "soft",
            Doneness::Medium => "medium",
            Doneness::Hard => "hard",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Doneness::Soft => "Soft",
            Doneness::Medium => "Medium",
            Doneness::Hard => "Hard",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Doneness::Soft => "🌊",
            Doneness::Medium => "☀️",
            Doneness::Hard => "🔥",
        }
    }
}

impl fmt::Display for Doneness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Doneness {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "soft" => Ok(Doneness::Soft),
            "medium" => Ok(Doneness::Medium),
            "hard" => Ok(Doneness::Hard),
            other => Err(format!(
                "Unknown doneness '{}', expected one of: soft, medium, hard",
                other
            )),
        }
    }
}

/// Cook times in seconds, rows by size and columns by doneness
const COOK_TIMES: [[u64; 3]; 3] = [
    [180, 240, 300], // small: 3, 4, 5 minutes
    [240, 300, 360], // medium: 4, 5, 6 minutes
    [300, 360, 420], // large: 5, 6, 7 minutes
];

/// Look up the cook time in seconds for a size and doneness
pub fn lookup_duration(size: EggSize, doneness: Doneness) -> u64 {
    let row = match size {
        EggSize::Small => 0,
        EggSize::Medium => 1,
        EggSize::Large => 2,
    };
    let column = match doneness {
        Doneness::Soft => 0,
        Doneness::Medium => 1,
        Doneness::Hard => 2,
    };
    COOK_TIMES[row][column]
}

/// Format seconds as a zero-padded `MM:SS` clock
pub fn format_clock(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_matches_table() {
        let expected = [
            (EggSize::Small, Doneness::Soft, 180),
            (EggSize::Small, Doneness::Medium, 240),
            (EggSize::Small, Doneness::Hard, 300),
            (EggSize::Medium, Doneness::Soft, 240),
            (EggSize::Medium, Doneness::Medium, 300),
            (EggSize::Medium, Doneness::Hard, 360),
            (EggSize::Large, Doneness::Soft, 300),
            (EggSize::Large, Doneness::Medium, 360),
            (EggSize::Large, Doneness::Hard, 420),
        ];
        for (size, doneness, seconds) in expected {
            assert_eq!(lookup_duration(size, doneness), seconds, "{} {}", size, doneness);
        }
    }

    #[test]
    fn clock_is_zero_padded() {
        assert_eq!(format_clock(65), "01:05");
        assert_eq!(format_clock(300), "05:00");
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(420), "07:00");
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Large".parse::<EggSize>(), Ok(EggSize::Large));
        assert_eq!("HARD".parse::<Doneness>(), Ok(Doneness::Hard));
        assert!("jumbo".parse::<EggSize>().unwrap_err().contains("jumbo"));
        assert!("raw".parse::<Doneness>().is_err());
    }

    #[test]
    fn defaults_to_medium() {
        assert_eq!(EggSize::default(), EggSize::Medium);
        assert_eq!(Doneness::default(), Doneness::Medium);
    }
}

//! Named base models a construction request starts from.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// A named preset selected by the `base_model` configuration key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    Budget,
    Office,
    HighEnd,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Budget, Preset::Office, Preset::HighEnd];

    pub fn as_str(self) -> &'static str {
        match self {
            Preset::Budget => "budget",
            Preset::Office => "office",
            Preset::HighEnd => "high-end",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "budget" => Ok(Preset::Budget),
            "office" => Ok(Preset::Office),
            "high-end" => Ok(Preset::HighEnd),
            other => Err(format!("invalid preset: '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_from_str() {
        assert_eq!("budget".parse::<Preset>(), Ok(Preset::Budget));
        assert_eq!("office".parse::<Preset>(), Ok(Preset::Office));
        assert_eq!("high-end".parse::<Preset>(), Ok(Preset::HighEnd));
        assert!("highend".parse::<Preset>().is_err());
        assert!("unknown-model".parse::<Preset>().is_err());
    }

    #[test]
    fn test_preset_serde_matches_display() {
        for preset in Preset::ALL {
            let json = serde_json::to_string(&preset).unwrap();
            assert_eq!(json, format!("\"{preset}\""));
        }
    }
}

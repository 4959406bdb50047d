//! Gender - Demographic selection offered by the intake form

use serde::{Deserialize, Serialize};

/// Gender options shown in the demographics form
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
    PreferNotToSay,
}

impl Gender {
    /// All options in the order the form presents them
    pub const ALL: [Gender; 4] = [
        Gender::Male,
        Gender::Female,
        Gender::Other,
        Gender::PreferNotToSay,
    ];
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
            Gender::Other => write!(f, "Other"),
            Gender::PreferNotToSay => write!(f, "Prefer not to say"),
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['_', '-'], " ").as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            "prefer not to say" => Ok(Gender::PreferNotToSay),
            _ => Err(format!("Unknown gender option: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_display_form() {
        for gender in Gender::ALL {
            let parsed: Gender = gender.to_string().parse().unwrap();
            assert_eq!(parsed, gender);
        }
    }

    #[test]
    fn test_parse_accepts_snake_case() {
        assert_eq!(
            "prefer_not_to_say".parse::<Gender>().unwrap(),
            Gender::PreferNotToSay
        );
        assert!("unknown".parse::<Gender>().is_err());
    }
}

//! SeverityTier - How strongly the analyzer responds to a thought

use serde::{Deserialize, Serialize};

/// Response tier selected from the number of distinct distortions found
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SeverityTier {
    /// No distortions detected
    None,
    /// One or two distinct distortions
    Mild,
    /// Three or more distinct distortions
    Multiple,
}

impl SeverityTier {
    /// Select the tier for a count of distinct triggers
    pub fn from_count(count: usize) -> Self {
        match count {
            0 => SeverityTier::None,
            1..=2 => SeverityTier::Mild,
            _ => SeverityTier::Multiple,
        }
    }

    /// Message shown to the user for this tier
    pub fn message(self) -> &'static str {
        match self {
            SeverityTier::None => {
                "No common cognitive distortions detected. That sounds like balanced thinking. Well done!"
            }
            SeverityTier::Mild => {
                "Some distortions were detected. Try answering the prompts above to reframe the thought."
            }
            SeverityTier::Multiple => {
                "Multiple distortions were detected. Consider working through these patterns with a qualified therapist or counselor."
            }
        }
    }
}

impl std::fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeverityTier::None => write!(f, "none"),
            SeverityTier::Mild => write!(f, "mild"),
            SeverityTier::Multiple => write!(f, "multiple"),
        }
    }
}

//! Distortion Analyzer - Flags cognitive distortion keywords in a thought
//!
//! Matching is a case-insensitive substring search over a fixed table.
//! Each trigger counts once no matter how often it appears.
//! Raw thought text is never logged; only counts and trigger labels are.

use serde::Serialize;

use crate::domain::value_objects::SeverityTier;

/// A cognitive distortion trigger and its reframing prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Distortion {
    /// Lowercase substring that triggers the prompt
    pub trigger: &'static str,
    /// Name of the distortion pattern
    pub category: &'static str,
    /// Question that helps reframe the thought
    pub prompt: &'static str,
}

/// Fixed trigger table. No trigger is a substring of another.
pub static DISTORTION_TABLE: &[Distortion] = &[
    Distortion {
        trigger: "always",
        category: "All-or-nothing thinking",
        prompt: "Is it really always? Can you recall a time when it was different?",
    },
    Distortion {
        trigger: "never",
        category: "All-or-nothing thinking",
        prompt: "Is it truly never? Look for one exception, however small.",
    },
    Distortion {
        trigger: "everyone",
        category: "Overgeneralization",
        prompt: "Does this apply to literally everyone, or to a few specific people?",
    },
    Distortion {
        trigger: "nobody",
        category: "Overgeneralization",
        prompt: "Is there really nobody? Who has shown you care or support before?",
    },
    Distortion {
        trigger: "should",
        category: "Should statements",
        prompt: "Who says you should? What would you tell a friend holding this rule?",
    },
    Distortion {
        trigger: "must",
        category: "Should statements",
        prompt: "What happens if you treat this as a preference instead of a must?",
    },
    Distortion {
        trigger: "worst",
        category: "Catastrophizing",
        prompt: "What is the most likely outcome, rather than the worst one?",
    },
    Distortion {
        trigger: "disaster",
        category: "Catastrophizing",
        prompt: "Will this still feel like a disaster in a week, a month, a year?",
    },
    Distortion {
        trigger: "ruined",
        category: "Catastrophizing",
        prompt: "Is it ruined, or is it a setback you can recover from?",
    },
    Distortion {
        trigger: "worthless",
        category: "Labeling",
        prompt: "Would you call a friend worthless for the same thing? What are your strengths?",
    },
    Distortion {
        trigger: "loser",
        category: "Labeling",
        prompt: "One event does not define a person. What would a fairer description be?",
    },
    Distortion {
        trigger: "they think",
        category: "Mind reading",
        prompt: "How do you know what they think? What evidence do you actually have?",
    },
    Distortion {
        trigger: "what if",
        category: "Fortune telling",
        prompt: "What evidence supports this prediction? What else could happen?",
    },
];

/// Result of analyzing one thought
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistortionAnalysis {
    /// Matched triggers, in table order, one per distinct trigger
    pub detections: Vec<&'static Distortion>,
    pub tier: SeverityTier,
}

impl DistortionAnalysis {
    pub fn count(&self) -> usize {
        self.detections.len()
    }

    pub fn message(&self) -> &'static str {
        self.tier.message()
    }
}

/// Analyze a thought against the distortion table
pub fn analyze(text: &str) -> DistortionAnalysis {
    analyze_with(DISTORTION_TABLE, text)
}

/// Analyze against `table`; triggers must be lowercase
fn analyze_with(table: &'static [Distortion], text: &str) -> DistortionAnalysis {
    let lowered = text.to_lowercase();

    let detections: Vec<&'static Distortion> = table
        .iter()
        .filter(|d| lowered.contains(d.trigger))
        .collect();

    let tier = SeverityTier::from_count(detections.len());

    tracing::debug!(
        matches = detections.len(),
        triggers = ?detections.iter().map(|d| d.trigger).collect::<Vec<_>>(),
        %tier,
        "Analyzed thought"
    );

    DistortionAnalysis { detections, tier }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triggers(analysis: &DistortionAnalysis) -> Vec<&'static str> {
        analysis.detections.iter().map(|d| d.trigger).collect()
    }

    #[test]
    fn test_no_triggers_is_affirming() {
        let analysis = analyze("Today was okay. I went for a walk and cooked dinner.");
        assert_eq!(analysis.count(), 0);
        assert_eq!(analysis.tier, SeverityTier::None);
        assert!(analysis.message().contains("No common cognitive distortions"));
    }

    #[test]
    fn test_empty_text() {
        let analysis = analyze("");
        assert_eq!(analysis.count(), 0);
        assert_eq!(analysis.tier, SeverityTier::None);
    }

    #[test]
    fn test_single_trigger_is_mild() {
        let analysis = analyze("I always fail");
        assert_eq!(triggers(&analysis), vec!["always"]);
        assert_eq!(analysis.tier, SeverityTier::Mild);
    }

    #[test]
    fn test_case_insensitive() {
        let analysis = analyze("NOBODY CARES");
        assert_eq!(triggers(&analysis), vec!["nobody"]);
    }

    #[test]
    fn test_repeated_trigger_counts_once() {
        let analysis = analyze("Always late, always tired, ALWAYS behind.");
        assert_eq!(analysis.count(), 1);
        assert_eq!(analysis.tier, SeverityTier::Mild);
    }

    #[test]
    fn test_two_triggers_still_mild() {
        let analysis = analyze("I should have known it would never work");
        assert_eq!(triggers(&analysis), vec!["never", "should"]);
        assert_eq!(analysis.tier, SeverityTier::Mild);
    }

    #[test]
    fn test_three_triggers_is_multiple() {
        let analysis = analyze("Everyone thinks I'm a loser and it's the worst");
        assert_eq!(triggers(&analysis), vec!["everyone", "worst", "loser"]);
        assert_eq!(analysis.tier, SeverityTier::Multiple);
        assert!(analysis.message().contains("therapist"));
    }

    #[test]
    fn test_multi_word_trigger() {
        let analysis = analyze("What if they think I'm boring?");
        assert_eq!(triggers(&analysis), vec!["they think", "what if"]);
    }

    #[test]
    fn test_detections_point_into_table() {
        let analysis = analyze("Nobody listens");
        assert_eq!(analysis.detections, vec![&DISTORTION_TABLE[3]]);
    }

    #[test]
    fn test_pure_function() {
        let text = "It must be a disaster and I've ruined it";
        assert_eq!(analyze(text), analyze(text));
        assert_eq!(analyze(text).tier, SeverityTier::Multiple);
    }

    #[test]
    fn test_table_triggers_are_lowercase_and_unique() {
        for (i, d) in DISTORTION_TABLE.iter().enumerate() {
            assert_eq!(d.trigger, d.trigger.to_lowercase());
            for other in &DISTORTION_TABLE[i + 1..] {
                assert!(!d.trigger.contains(other.trigger));
                assert!(!other.trigger.contains(d.trigger));
            }
        }
    }

    static CUSTOM_TABLE: [Distortion; 1] = [Distortion {
        trigger: "hopeless",
        category: "Emotional reasoning",
        prompt: "Feelings are not facts.",
    }];

    #[test]
    fn test_custom_table() {
        let analysis = analyze_with(&CUSTOM_TABLE, "I feel Hopeless");
        assert_eq!(analysis.count(), 1);
        assert_eq!(analysis.detections[0].prompt, "Feelings are not facts.");
    }
}

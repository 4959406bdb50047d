//! ConsentChoice - Answer to the data collection notice

/// Privacy notice shown before consent is requested
pub const PRIVACY_NOTICE: &str = "To improve wellbeing insights, we collect basic demographic \
information (age, gender, profession) along with your reflections. Your data will be kept \
confidential and stored locally. By continuing, you consent to this data collection. If you do \
not consent, you will not be able to use the app.";

/// Consent question
pub const CONSENT_QUESTION: &str =
    "Do you consent to the collection and safe storage of your demographic and reflection data?";

/// Shown when consent is declined
pub const CONSENT_DECLINED: &str =
    "You must provide consent to use this app. Thank you for considering.";

/// Answer to the consent question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsentChoice {
    Given,
    Declined,
}

impl ConsentChoice {
    /// Options in the order they are offered
    pub const ALL: [ConsentChoice; 2] = [ConsentChoice::Given, ConsentChoice::Declined];

    pub fn is_given(self) -> bool {
        matches!(self, ConsentChoice::Given)
    }
}

impl std::fmt::Display for ConsentChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConsentChoice::Given => write!(f, "Yes, I consent"),
            ConsentChoice::Declined => write!(f, "No, I do not consent"),
        }
    }
}

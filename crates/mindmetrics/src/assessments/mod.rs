//! Assessment pipeline: question banks, scoring, classification, and the
//! attempt lifecycle that persists and gates results.

pub mod attempts;
pub mod bank;
pub mod classify;
pub mod flow;
pub mod scoring;

use serde::{Deserialize, Serialize};

/// The four self-assessments administered by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestKind {
    Iq,
    Adhd,
    Asd,
    Anxiety,
}

impl TestKind {
    pub const ALL: [TestKind; 4] = [TestKind::Iq, TestKind::Adhd, TestKind::Asd, TestKind::Anxiety];

    pub const fn label(self) -> &'static str {
        match self {
            TestKind::Iq => "iq",
            TestKind::Adhd => "adhd",
            TestKind::Asd => "asd",
            TestKind::Anxiety => "anxiety",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            TestKind::Iq => "IQ Assessment",
            TestKind::Adhd => "ADHD Self-Screening",
            TestKind::Asd => "Autism Spectrum Self-Screening",
            TestKind::Anxiety => "Anxiety Check-In",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "iq" => Some(TestKind::Iq),
            "adhd" => Some(TestKind::Adhd),
            "asd" | "autism" => Some(TestKind::Asd),
            "anxiety" => Some(TestKind::Anxiety),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_labels_and_alias() {
        for kind in TestKind::ALL {
            assert_eq!(TestKind::parse(kind.label()), Some(kind));
        }
        assert_eq!(TestKind::parse("Autism"), Some(TestKind::Asd));
        assert_eq!(TestKind::parse("eq"), None);
    }
}

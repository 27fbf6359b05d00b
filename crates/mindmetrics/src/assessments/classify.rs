//! Threshold classification of raw scores.
//!
//! Bands are checked highest-first and are closed at their minimum: a score
//! exactly on a threshold falls into the higher band. The floor band has no
//! minimum, so every score maps to exactly one band and classification never
//! fails. Classification is derived once at submission and stored with the
//! record; reloading must reproduce the stored strings, not recompute them.

use serde::{Deserialize, Serialize};

use super::TestKind;

/// Human-readable band a raw score falls into, including the presentational
/// fields the result screens consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub category: String,
    pub description: String,
    pub color: String,
    pub bg_color: String,
}

struct Band {
    min: u32,
    category: &'static str,
    description: &'static str,
    color: &'static str,
    bg_color: &'static str,
}

impl Band {
    fn classification(&self) -> Classification {
        Classification {
            category: self.category.to_string(),
            description: self.description.to_string(),
            color: self.color.to_string(),
            bg_color: self.bg_color.to_string(),
        }
    }
}

struct BandTable {
    graded: &'static [Band],
    floor: Band,
}

impl BandTable {
    fn pick(&self, score: u32) -> &Band {
        self.graded
            .iter()
            .find(|band| score >= band.min)
            .unwrap_or(&self.floor)
    }
}

const IQ_TABLE: BandTable = BandTable {
    graded: &[
        Band {
            min: 140,
            category: "Genius",
            description: "Genius or near-genius territory; exceptional abstract reasoning.",
            color: "#7C3AED",
            bg_color: "#F3E8FF",
        },
        Band {
            min: 120,
            category: "Very superior",
            description: "Very superior intelligence, well above the average range.",
            color: "#2563EB",
            bg_color: "#DBEAFE",
        },
        Band {
            min: 110,
            category: "Superior",
            description: "Superior intelligence, comfortably above the average range.",
            color: "#0891B2",
            bg_color: "#CFFAFE",
        },
        Band {
            min: 90,
            category: "Normal/average",
            description: "Normal or average intelligence, where most test takers land.",
            color: "#16A34A",
            bg_color: "#DCFCE7",
        },
        Band {
            min: 80,
            category: "Dullness",
            description: "Slightly below the average range on this instrument.",
            color: "#CA8A04",
            bg_color: "#FEF9C3",
        },
        Band {
            min: 70,
            category: "Borderline deficiency",
            description: "Borderline performance on the reasoning items.",
            color: "#EA580C",
            bg_color: "#FFEDD5",
        },
    ],
    floor: Band {
        min: 0,
        category: "Deficiency",
        description: "Well below the average range on this instrument.",
        color: "#DC2626",
        bg_color: "#FEE2E2",
    },
};

const ADHD_TABLE: BandTable = BandTable {
    graded: &[
        Band {
            min: 60,
            category: "Likely ADHD",
            description: "Responses are highly consistent with adult ADHD traits; a professional evaluation is recommended.",
            color: "#DC2626",
            bg_color: "#FEE2E2",
        },
        Band {
            min: 40,
            category: "Possible ADHD",
            description: "Some responses align with adult ADHD traits; consider discussing them with a professional.",
            color: "#CA8A04",
            bg_color: "#FEF9C3",
        },
    ],
    floor: Band {
        min: 0,
        category: "Unlikely ADHD",
        description: "Responses show little alignment with adult ADHD traits.",
        color: "#16A34A",
        bg_color: "#DCFCE7",
    },
};

const ASD_TABLE: BandTable = BandTable {
    graded: &[
        Band {
            min: 18,
            category: "Likely ASD",
            description: "Responses are highly consistent with autism spectrum traits; a professional evaluation is recommended.",
            color: "#DC2626",
            bg_color: "#FEE2E2",
        },
        Band {
            min: 12,
            category: "Possible ASD",
            description: "Some responses align with autism spectrum traits; consider a follow-up conversation with a professional.",
            color: "#CA8A04",
            bg_color: "#FEF9C3",
        },
    ],
    floor: Band {
        min: 0,
        category: "Unlikely ASD",
        description: "Responses show little alignment with autism spectrum traits.",
        color: "#16A34A",
        bg_color: "#DCFCE7",
    },
};

const ANXIETY_TABLE: BandTable = BandTable {
    graded: &[
        Band {
            min: 20,
            category: "Severe Anxiety",
            description: "Severe anxiety symptoms; reaching out to a professional is strongly encouraged.",
            color: "#DC2626",
            bg_color: "#FEE2E2",
        },
        Band {
            min: 15,
            category: "Moderate Anxiety",
            description: "Moderate anxiety symptoms over the reporting window.",
            color: "#EA580C",
            bg_color: "#FFEDD5",
        },
        Band {
            min: 10,
            category: "Mild Anxiety",
            description: "Mild anxiety symptoms over the reporting window.",
            color: "#CA8A04",
            bg_color: "#FEF9C3",
        },
    ],
    floor: Band {
        min: 0,
        category: "Minimal Anxiety",
        description: "Minimal anxiety symptoms over the reporting window.",
        color: "#16A34A",
        bg_color: "#DCFCE7",
    },
};

fn table(test: TestKind) -> &'static BandTable {
    match test {
        TestKind::Iq => &IQ_TABLE,
        TestKind::Adhd => &ADHD_TABLE,
        TestKind::Asd => &ASD_TABLE,
        TestKind::Anxiety => &ANXIETY_TABLE,
    }
}

/// Map a raw score onto its band for `test`.
pub fn classify(test: TestKind, score: u32) -> Classification {
    table(test).pick(score).classification()
}

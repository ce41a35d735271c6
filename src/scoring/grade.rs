use std::fmt;

use serde::{Deserialize, Serialize};

/// Letter grade for a game, ordered best first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "C+")]
    CPlus,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "D")]
    D,
    /// The game could not be scored
    #[serde(rename = "N/A")]
    NotAvailable,
}

impl Grade {
    /// Display order, including `N/A`
    pub const ALL: [Grade; 8] = [
        Grade::APlus,
        Grade::A,
        Grade::BPlus,
        Grade::B,
        Grade::CPlus,
        Grade::C,
        Grade::D,
        Grade::NotAvailable,
    ];

    pub fn from_score(total_score: f64) -> Self {
        if total_score >= 93.0 {
            Grade::APlus
        } else if total_score >= 85.0 {
            Grade::A
        } else if total_score >= 80.0 {
            Grade::BPlus
        } else if total_score >= 75.0 {
            Grade::B
        } else if total_score >= 70.0 {
            Grade::CPlus
        } else if total_score >= 65.0 {
            Grade::C
        } else {
            Grade::D
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::CPlus => "C+",
            Grade::C => "C",
            Grade::D => "D",
            Grade::NotAvailable => "N/A",
        }
    }

    pub fn is_graded(&self) -> bool {
        *self != Grade::NotAvailable
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

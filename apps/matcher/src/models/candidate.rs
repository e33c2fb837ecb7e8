use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Structured attributes pulled out of one resume. Built once, never mutated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub name: Option<String>,
    pub skills: BTreeSet<String>,
    pub qualification: BTreeSet<String>,
    pub experience: Option<Experience>,
}

/// Total professional experience, summed from the date ranges on a resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    total_months: u32,
}

impl Experience {
    /// `None` when there is no signal at all (zero months).
    pub fn from_months(total_months: u32) -> Option<Self> {
        (total_months > 0).then_some(Self { total_months })
    }

    pub fn total_months(&self) -> u32 {
        self.total_months
    }

    pub fn whole_years(&self) -> u32 {
        self.total_months / 12
    }

    pub fn remaining_months(&self) -> u32 {
        self.total_months % 12
    }

    /// Years as a fraction, rounded to two decimals.
    pub fn as_years(&self) -> f64 {
        (self.total_months as f64 / 12.0 * 100.0).round() / 100.0
    }
}

impl fmt::Display for Experience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.total_months < 12 {
            return write!(f, "{} months", self.total_months);
        }
        write!(f, "{} years", self.whole_years())?;
        match self.remaining_months() {
            0 => Ok(()),
            months => write!(f, " {months} months"),
        }
    }
}

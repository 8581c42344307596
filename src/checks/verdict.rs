// Final verdict aggregation.

use std::fmt;

/// Red flags at or above this count fail an otherwise-clean account.
pub const RED_FLAG_LIMIT: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Verified,
    Dismissed,
}

impl Verdict {
    /// Aggregate findings: any instant dismissal fails outright; otherwise
    /// the red-flag count decides.
    pub fn from_findings(dismissals: &[String], red_flags: &[String]) -> Self {
        if !dismissals.is_empty() || red_flags.len() >= RED_FLAG_LIMIT {
            Verdict::Dismissed
        } else {
            Verdict::Verified
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Verified => "VERIFIED",
            Verdict::Dismissed => "DISMISSED",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GeneState {
    Present,
    Absent,
    Partial,
}

impl GeneState {
    pub fn as_str(self) -> &'static str {
        match self {
            GeneState::Present => "Present",
            GeneState::Absent => "Absent",
            GeneState::Partial => "Partial",
        }
    }
}

impl AsRef<str> for GeneState {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for GeneState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn state_order() -> &'static [GeneState] {
    &[GeneState::Present, GeneState::Absent, GeneState::Partial]
}

/// Genes charted on the dashboard.
pub const TALLY_GENES: &[&str] = &["GeneX", "GeneY"];

/// States charted on the dashboard. `Partial` is parsed but not charted.
pub const TALLY_STATES: &[GeneState] = &[GeneState::Present, GeneState::Absent];

/// Clause text as it appears inside an annotation, e.g. `GeneX: Present`.
pub fn clause_pattern(gene: &str, state: &str) -> String {
    format!("{gene}: {state}")
}

/// Chart label for a gene/state pair, e.g. `GeneX Present`.
pub fn tally_tag(gene: &str, state: &str) -> String {
    format!("{gene} {state}")
}

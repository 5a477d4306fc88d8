//! Selection policies - decide which facility type a plan builds next
//!
//! Every policy carries its own running state (a cursor or score
//! accumulators), is cloned by value when a simulation is copied, and is
//! compared with other policies by kind only.

pub mod balanced;
pub mod category;
pub mod naive;

pub use balanced::BalancedSelection;
pub use category::CategorySelection;
pub use naive::NaiveSelection;

use serde::Serialize;

use crate::city::facility::FacilityType;
use crate::core::error::{SelectionError, SimError};

/// The kinds of selection policy a plan can run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    Naive,
    Balanced,
    Economy,
    Sustainability,
}

impl PolicyKind {
    pub const ALL: [PolicyKind; 4] = [
        PolicyKind::Naive,
        PolicyKind::Balanced,
        PolicyKind::Economy,
        PolicyKind::Sustainability,
    ];

    /// Build a fresh policy of this kind with zeroed running state
    pub fn create(self) -> Box<dyn SelectionPolicy> {
        match self {
            PolicyKind::Naive => Box::new(NaiveSelection::new()),
            PolicyKind::Balanced => Box::new(BalancedSelection::new(0, 0, 0)),
            PolicyKind::Economy => Box::new(CategorySelection::economy()),
            PolicyKind::Sustainability => Box::new(CategorySelection::sustainability()),
        }
    }

    /// Name used in commands and configuration files
    pub fn name(&self) -> &'static str {
        match self {
            PolicyKind::Naive => "naive",
            PolicyKind::Balanced => "balanced",
            PolicyKind::Economy => "economy",
            PolicyKind::Sustainability => "sustainability",
        }
    }

    /// Short name accepted as an alias
    pub fn short_name(&self) -> &'static str {
        match self {
            PolicyKind::Naive => "nve",
            PolicyKind::Balanced => "bal",
            PolicyKind::Economy => "eco",
            PolicyKind::Sustainability => "env",
        }
    }
}

impl std::str::FromStr for PolicyKind {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        PolicyKind::ALL
            .into_iter()
            .find(|kind| kind.name() == lower || kind.short_name() == lower)
            .ok_or_else(|| SimError::UnknownPolicy(s.to_string()))
    }
}

impl std::fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Chooses the next facility type for a plan to start building
pub trait SelectionPolicy: std::fmt::Debug {
    fn kind(&self) -> PolicyKind;

    /// Pick a facility type from the catalog without modifying it
    fn select_facility<'a>(
        &mut self,
        catalog: &'a [FacilityType],
    ) -> Result<&'a FacilityType, SelectionError>;

    /// Called by the owning plan once a selected facility has actually
    /// entered construction
    fn record_admitted(&mut self, _facility: &FacilityType) {}

    fn box_clone(&self) -> Box<dyn SelectionPolicy>;

    fn same_kind(&self, other: &dyn SelectionPolicy) -> bool {
        self.kind() == other.kind()
    }
}

impl Clone for Box<dyn SelectionPolicy> {
    fn clone(&self) -> Self {
        self.box_clone()
    }
}

/// Next index after `index`, wrapping at the catalog length
pub(crate) fn advance_cursor(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (index + 1) % len
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_policy_names() {
        assert_eq!("naive".parse::<PolicyKind>(), Ok(PolicyKind::Naive));
        assert_eq!("bal".parse::<PolicyKind>(), Ok(PolicyKind::Balanced));
        assert_eq!("Economy".parse::<PolicyKind>(), Ok(PolicyKind::Economy));
        assert_eq!("env".parse::<PolicyKind>(), Ok(PolicyKind::Sustainability));
        assert_eq!(
            "greedy".parse::<PolicyKind>(),
            Err(SimError::UnknownPolicy("greedy".into()))
        );
    }

    #[test]
    fn test_create_matches_kind() {
        for kind in PolicyKind::ALL {
            assert_eq!(kind.create().kind(), kind);
        }
    }

    #[test]
    fn test_same_kind_comparison() {
        let naive = PolicyKind::Naive.create();
        let other_naive = PolicyKind::Naive.create();
        let balanced = PolicyKind::Balanced.create();
        assert!(naive.same_kind(other_naive.as_ref()));
        assert!(!naive.same_kind(balanced.as_ref()));
    }

    #[test]
    fn test_advance_cursor_wraps() {
        assert_eq!(advance_cursor(0, 3), 1);
        assert_eq!(advance_cursor(2, 3), 0);
        assert_eq!(advance_cursor(5, 0), 0);
    }
}

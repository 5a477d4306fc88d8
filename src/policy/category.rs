//! Category-restricted round-robin (economy / sustainability plans)

use crate::city::facility::{FacilityCategory, FacilityType};
use crate::core::error::SelectionError;
use crate::policy::{advance_cursor, PolicyKind, SelectionPolicy};

/// Round-robin that skips entries outside one category
///
/// The scan starts at the cursor and wraps around the catalog at most once.
/// After a pick the cursor sits one past the chosen entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySelection {
    kind: PolicyKind,
    category: FacilityCategory,
    cursor: usize,
}

impl CategorySelection {
    /// Only builds economy facilities
    pub fn economy() -> Self {
        Self {
            kind: PolicyKind::Economy,
            category: FacilityCategory::Economy,
            cursor: 0,
        }
    }

    /// Only builds environment facilities
    pub fn sustainability() -> Self {
        Self {
            kind: PolicyKind::Sustainability,
            category: FacilityCategory::Environment,
            cursor: 0,
        }
    }

    pub fn category(&self) -> FacilityCategory {
        self.category
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl SelectionPolicy for CategorySelection {
    fn kind(&self) -> PolicyKind {
        self.kind
    }

    fn select_facility<'a>(
        &mut self,
        catalog: &'a [FacilityType],
    ) -> Result<&'a FacilityType, SelectionError> {
        if catalog.is_empty() {
            return Err(SelectionError::EmptyCatalog);
        }

        let len = catalog.len();
        let start = self.cursor % len;
        let index = (0..len)
            .map(|offset| (start + offset) % len)
            .find(|&i| catalog[i].category() == self.category)
            .ok_or(SelectionError::NoEligibleFacility(self.category))?;

        self.cursor = advance_cursor(index, len);
        Ok(&catalog[index])
    }

    fn box_clone(&self) -> Box<dyn SelectionPolicy> {
        Box::new(self.clone())
    }
}

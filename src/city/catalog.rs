//! Facility catalog - every facility type a plan may choose from

use serde::Serialize;

use crate::city::facility::{FacilityCategory, FacilityType};
use crate::core::error::SimError;

/// Append-only list of facility types in registration order
///
/// Selection policies read the catalog by position, so entries are never
/// removed or reordered once registered.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FacilityCatalog {
    entries: Vec<FacilityType>,
}

impl FacilityCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a facility type, rejecting duplicate names
    pub fn register(&mut self, facility_type: FacilityType) -> Result<(), SimError> {
        if self.contains(facility_type.name()) {
            return Err(SimError::DuplicateFacility(facility_type.name().to_string()));
        }
        self.entries.push(facility_type);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&FacilityType> {
        self.entries.iter().find(|f| f.name() == name)
    }

    /// Entries of one category, in catalog order
    pub fn in_category(&self, category: FacilityCategory) -> impl Iterator<Item = &FacilityType> {
        self.entries.iter().filter(move |f| f.category() == category)
    }

    pub fn all(&self) -> &[FacilityType] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

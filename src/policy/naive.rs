//! Round-robin selection over the whole catalog

use crate::city::facility::FacilityType;
use crate::core::error::SelectionError;
use crate::policy::{advance_cursor, PolicyKind, SelectionPolicy};

/// Walks the catalog in registration order, ignoring category and score
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NaiveSelection {
    cursor: usize,
}

impl NaiveSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index the next selection starts from
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl SelectionPolicy for NaiveSelection {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Naive
    }

    fn select_facility<'a>(
        &mut self,
        catalog: &'a [FacilityType],
    ) -> Result<&'a FacilityType, SelectionError> {
        if catalog.is_empty() {
            return Err(SelectionError::EmptyCatalog);
        }

        let index = self.cursor % catalog.len();
        self.cursor = advance_cursor(index, catalog.len());
        Ok(&catalog[index])
    }

    fn box_clone(&self) -> Box<dyn SelectionPolicy> {
        Box::new(self.clone())
    }
}

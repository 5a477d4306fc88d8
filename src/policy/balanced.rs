//! Balanced selection - keeps the three score dimensions close together

use crate::city::facility::FacilityType;
use crate::core::error::SelectionError;
use crate::policy::{PolicyKind, SelectionPolicy};

/// Picks the facility that leaves the running score triple most even
///
/// For each candidate the would-be triple is computed; its shortfall is the
/// sum of each dimension's distance below the triple's maximum. The smallest
/// shortfall wins, ties going to the earliest catalog entry.
///
/// Selection is speculative. Accumulators only move when the owning plan
/// calls [`SelectionPolicy::record_admitted`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BalancedSelection {
    life_quality: i64,
    economy: i64,
    environment: i64,
}

impl BalancedSelection {
    pub fn new(life_quality: i64, economy: i64, environment: i64) -> Self {
        Self {
            life_quality,
            economy,
            environment,
        }
    }

    /// Current (life quality, economy, environment) accumulators
    pub fn accumulators(&self) -> (i64, i64, i64) {
        (self.life_quality, self.economy, self.environment)
    }

    /// Total shortfall from the maximum if `facility` were added
    pub fn shortfall(&self, facility: &FacilityType) -> i64 {
        let triple = [
            self.life_quality
                .saturating_add(i64::from(facility.life_quality_score())),
            self.economy.saturating_add(i64::from(facility.economy_score())),
            self.environment
                .saturating_add(i64::from(facility.environment_score())),
        ];
        let max = triple.iter().copied().max().unwrap_or_default();
        triple
            .iter()
            .fold(0_i64, |total, score| total.saturating_add(max.saturating_sub(*score)))
    }
}

impl SelectionPolicy for BalancedSelection {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Balanced
    }

    fn select_facility<'a>(
        &mut self,
        catalog: &'a [FacilityType],
    ) -> Result<&'a FacilityType, SelectionError> {
        let mut best: Option<(&FacilityType, i64)> = None;

        for facility in catalog {
            let shortfall = self.shortfall(facility);
            // Strict comparison keeps the first candidate on ties
            if best.map_or(true, |(_, lowest)| shortfall < lowest) {
                best = Some((facility, shortfall));
            }
        }

        best.map(|(facility, _)| facility)
            .ok_or(SelectionError::EmptyCatalog)
    }

    fn record_admitted(&mut self, facility: &FacilityType) {
        self.life_quality = self
            .life_quality
            .saturating_add(i64::from(facility.life_quality_score()));
        self.economy = self.economy.saturating_add(i64::from(facility.economy_score()));
        self.environment = self
            .environment
            .saturating_add(i64::from(facility.environment_score()));
    }

    fn box_clone(&self) -> Box<dyn SelectionPolicy> {
        Box::new(self.clone())
    }
}

//! Facility types and facilities under construction

use serde::Serialize;

use crate::core::error::SimError;
use crate::core::types::Scores;

/// Which score dimension a facility type primarily serves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FacilityCategory {
    LifeQuality,
    Economy,
    Environment,
}

impl FacilityCategory {
    /// Map the collaborator's category code (0 = life quality, 1 = economy, 2 = environment)
    pub fn from_code(code: i64) -> Result<Self, SimError> {
        match code {
            0 => Ok(FacilityCategory::LifeQuality),
            1 => Ok(FacilityCategory::Economy),
            2 => Ok(FacilityCategory::Environment),
            _ => Err(SimError::InvalidCode {
                kind: "facility category",
                code,
            }),
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            FacilityCategory::LifeQuality => 0,
            FacilityCategory::Economy => 1,
            FacilityCategory::Environment => 2,
        }
    }
}

impl std::fmt::Display for FacilityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FacilityCategory::LifeQuality => "Life Quality",
            FacilityCategory::Economy => "Economy",
            FacilityCategory::Environment => "Environment",
        };
        f.write_str(name)
    }
}

/// An immutable catalog entry describing something a plan can build
///
/// Two facility types are equal when their names match.
#[derive(Debug, Clone, Serialize)]
pub struct FacilityType {
    name: String,
    category: FacilityCategory,
    cost: u32,
    scores: Scores,
}

impl FacilityType {
    /// Create a facility type; the cost doubles as the number of ticks to build it
    pub fn new(
        name: impl Into<String>,
        category: FacilityCategory,
        cost: u32,
        scores: Scores,
    ) -> Result<Self, SimError> {
        let name = name.into();
        if cost == 0 {
            return Err(SimError::InvalidFacility {
                name,
                reason: "cost must be positive".into(),
            });
        }
        Ok(Self {
            name,
            category,
            cost,
            scores,
        })
    }

    /// Validate signed collaborator input before building a facility type
    pub fn from_raw(
        name: impl Into<String>,
        category: FacilityCategory,
        cost: i64,
        life_quality: i64,
        economy: i64,
        environment: i64,
    ) -> Result<Self, SimError> {
        let name = name.into();
        let invalid = |reason: &str| SimError::InvalidFacility {
            name: name.clone(),
            reason: reason.to_string(),
        };

        let cost = u32::try_from(cost).map_err(|_| invalid("cost must be positive"))?;
        let score = |value: i64| {
            u32::try_from(value).map_err(|_| invalid("scores can't be negative"))
        };
        let scores = Scores::new(score(life_quality)?, score(economy)?, score(environment)?);

        Self::new(name, category, cost, scores)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> FacilityCategory {
        self.category
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub fn scores(&self) -> Scores {
        self.scores
    }

    pub fn life_quality_score(&self) -> u32 {
        self.scores.life_quality
    }

    pub fn economy_score(&self) -> u32 {
        self.scores.economy
    }

    pub fn environment_score(&self) -> u32 {
        self.scores.environment
    }
}

impl PartialEq for FacilityType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for FacilityType {}

/// Lifecycle of a facility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FacilityStatus {
    /// Still counting down its build time
    UnderConstruction,
    /// Finished; terminal
    Operational,
}

/// Result of advancing a facility by one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructionProgress {
    /// Work done, facility still under construction
    InProgress { time_left: u32 },
    /// Work done, facility became operational on this tick
    Completed,
    /// Facility was already operational; nothing changed
    AlreadyOperational,
}

/// A facility type being built (or already built) in a specific settlement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Facility {
    facility_type: FacilityType,
    settlement: String,
    status: FacilityStatus,
    time_left: u32,
}

impl Facility {
    /// Start construction; time left begins at the type's cost
    pub fn new(facility_type: FacilityType, settlement: impl Into<String>) -> Self {
        let time_left = facility_type.cost();
        Self {
            facility_type,
            settlement: settlement.into(),
            status: FacilityStatus::UnderConstruction,
            time_left,
        }
    }

    /// Advance construction by one tick
    ///
    /// Reports `Completed` exactly once, on the tick time left reaches zero.
    pub fn advance(&mut self) -> ConstructionProgress {
        if self.status == FacilityStatus::Operational {
            return ConstructionProgress::AlreadyOperational;
        }

        self.time_left = self.time_left.saturating_sub(1);

        if self.time_left == 0 {
            self.status = FacilityStatus::Operational;
            ConstructionProgress::Completed
        } else {
            ConstructionProgress::InProgress {
                time_left: self.time_left,
            }
        }
    }

    pub fn facility_type(&self) -> &FacilityType {
        &self.facility_type
    }

    pub fn name(&self) -> &str {
        self.facility_type.name()
    }

    pub fn settlement(&self) -> &str {
        &self.settlement
    }

    pub fn status(&self) -> FacilityStatus {
        self.status
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn scores(&self) -> Scores {
        self.facility_type.scores()
    }
}

impl std::fmt::Display for Facility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = match self.status {
            FacilityStatus::UnderConstruction => "Under Construction",
            FacilityStatus::Operational => "Operational",
        };
        write!(
            f,
            "Facility Name: {}, Settlement: {}, Status: {}, Time Left: {}",
            self.name(),
            self.settlement,
            status,
            self.time_left
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn park(cost: u32) -> FacilityType {
        FacilityType::new(
            "park",
            FacilityCategory::Environment,
            cost,
            Scores::new(0, 0, 5),
        )
        .unwrap()
    }

    #[test]
    fn test_zero_cost_rejected() {
        let result = FacilityType::new("void", FacilityCategory::Economy, 0, Scores::default());
        assert!(matches!(result, Err(SimError::InvalidFacility { .. })));
    }

    #[test]
    fn test_from_raw_validation() {
        let ok = FacilityType::from_raw("mall", FacilityCategory::Economy, 3, 1, 4, 0).unwrap();
        assert_eq!(ok.cost(), 3);
        assert_eq!(ok.scores(), Scores::new(1, 4, 0));

        assert!(FacilityType::from_raw("mall", FacilityCategory::Economy, -3, 1, 4, 0).is_err());
        assert!(FacilityType::from_raw("mall", FacilityCategory::Economy, 0, 1, 4, 0).is_err());
        assert!(FacilityType::from_raw("mall", FacilityCategory::Economy, 3, 1, -4, 0).is_err());
    }

    #[test]
    fn test_equality_by_name_only() {
        let a = park(1);
        let b = FacilityType::new(
            "park",
            FacilityCategory::LifeQuality,
            9,
            Scores::new(9, 9, 9),
        )
        .unwrap();
        assert_eq!(a, b);
        let garden = FacilityType::new(
            "garden",
            FacilityCategory::Environment,
            1,
            Scores::new(0, 0, 5),
        )
        .unwrap();
        assert_ne!(a, garden);
    }

    #[test]
    fn test_category_codes() {
        for code in 0..3 {
            let category = FacilityCategory::from_code(code).unwrap();
            assert_eq!(category.code() as i64, code);
        }
        assert!(FacilityCategory::from_code(3).is_err());
    }

    #[test]
    fn test_countdown_and_single_transition() {
        let mut facility = Facility::new(park(3), "Arcadia");
        assert_eq!(facility.time_left(), 3);
        assert_eq!(facility.status(), FacilityStatus::UnderConstruction);

        assert_eq!(
            facility.advance(),
            ConstructionProgress::InProgress { time_left: 2 }
        );
        assert_eq!(
            facility.advance(),
            ConstructionProgress::InProgress { time_left: 1 }
        );
        assert_eq!(facility.advance(), ConstructionProgress::Completed);
        assert_eq!(facility.status(), FacilityStatus::Operational);
        assert_eq!(facility.time_left(), 0);

        // Never re-fires and never goes below zero
        assert_eq!(facility.advance(), ConstructionProgress::AlreadyOperational);
        assert_eq!(facility.time_left(), 0);
        assert_eq!(facility.status(), FacilityStatus::Operational);
    }

    #[test]
    fn test_unit_cost_completes_first_tick() {
        let mut facility = Facility::new(park(1), "Arcadia");
        assert_eq!(facility.advance(), ConstructionProgress::Completed);
    }

    #[test]
    fn test_facility_display() {
        let facility = Facility::new(park(2), "Arcadia");
        assert_eq!(
            facility.to_string(),
            "Facility Name: park, Settlement: Arcadia, Status: Under Construction, Time Left: 2"
        );
    }
}

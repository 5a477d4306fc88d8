//! City layer - settlements, facility catalog, facilities and plans

pub mod catalog;
pub mod facility;
pub mod plan;
pub mod settlement;

pub use catalog::FacilityCatalog;
pub use facility::{ConstructionProgress, Facility, FacilityCategory, FacilityStatus, FacilityType};
pub use plan::{Plan, PlanStatus, PlanSummary, PlanTick};
pub use settlement::{Settlement, SettlementTier};

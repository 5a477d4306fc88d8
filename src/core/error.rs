use thiserror::Error;

use crate::city::facility::FacilityCategory;
use crate::core::types::PlanId;

/// Validation and invariant failures raised by simulation operations.
///
/// Every variant is reported before any collection is touched, so a failed
/// operation never leaves partial state behind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    #[error("Settlement already exists: {0}")]
    DuplicateSettlement(String),

    #[error("Facility already exists: {0}")]
    DuplicateFacility(String),

    #[error("Invalid facility {name}: {reason}")]
    InvalidFacility { name: String, reason: String },

    #[error("Unknown selection policy: {0}")]
    UnknownPolicy(String),

    #[error("Settlement does not exist: {0}")]
    UnknownSettlement(String),

    #[error("Plan not found: {0}")]
    UnknownPlan(PlanId),

    #[error("Plan {0} already uses policy {1}")]
    SamePolicy(PlanId, String),

    #[error("Number of steps must be positive, got {0}")]
    InvalidTickCount(i64),

    #[error("No backup available")]
    NoBackup,

    #[error("Invalid {kind} code: {code}")]
    InvalidCode { kind: &'static str, code: i64 },

    #[error("Invalid {kind} name: {name}")]
    InvalidName { kind: &'static str, name: String },
}

/// A selection policy could not produce a facility from the catalog.
///
/// Not a command failure: a plan stops admitting facilities for the tick.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    #[error("No facilities available for selection")]
    EmptyCatalog,

    #[error("No facilities in the {0} category available")]
    NoEligibleFacility(FacilityCategory),
}

pub type Result<T> = std::result::Result<T, SimError>;

//! Plans - per-settlement construction schedulers
//!
//! Each tick a plan fills its free construction slots using its selection
//! policy, then advances everything under construction by one step. Facilities
//! that finish move to the completed list and add their scores to the plan.

use serde::Serialize;

use crate::city::catalog::FacilityCatalog;
use crate::city::facility::{ConstructionProgress, Facility};
use crate::city::settlement::Settlement;
use crate::core::error::SimError;
use crate::core::types::{PlanId, ScoreTotals};
use crate::policy::{PolicyKind, SelectionPolicy};

/// Whether a plan has free construction slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlanStatus {
    Available,
    Busy,
}

impl std::fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanStatus::Available => f.write_str("Available"),
            PlanStatus::Busy => f.write_str("Busy"),
        }
    }
}

/// What happened to a plan during one tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanTick {
    /// Facility types that entered construction, in admission order
    pub admitted: Vec<String>,
    /// Facilities that became operational, in completion order
    pub completed: Vec<String>,
}

/// Construction plan for one settlement
#[derive(Debug, Clone)]
pub struct Plan {
    id: PlanId,
    settlement: Settlement,
    policy: Box<dyn SelectionPolicy>,
    status: PlanStatus,
    under_construction: Vec<Facility>,
    completed: Vec<Facility>,
    scores: ScoreTotals,
}

impl Plan {
    pub fn new(id: PlanId, settlement: Settlement, policy: Box<dyn SelectionPolicy>) -> Self {
        Self {
            id,
            settlement,
            policy,
            status: PlanStatus::Available,
            under_construction: Vec::new(),
            completed: Vec::new(),
            scores: ScoreTotals::default(),
        }
    }

    /// Advance the plan by one tick against the shared catalog
    pub fn step(&mut self, catalog: &FacilityCatalog) -> PlanTick {
        let limit = self.settlement.construction_limit();
        let mut tick = PlanTick::default();

        // 1. Fill free slots
        while self.under_construction.len() < limit {
            let selected = match self.policy.select_facility(catalog.all()) {
                Ok(facility_type) => facility_type,
                Err(e) => {
                    tracing::debug!(plan = %self.id, "Admission stopped: {}", e);
                    break;
                }
            };

            self.policy.record_admitted(selected);
            self.under_construction
                .push(Facility::new(selected.clone(), self.settlement.name()));
            tick.admitted.push(selected.name().to_string());
        }

        // 2. Advance construction, promoting finished facilities
        let mut still_building = Vec::with_capacity(self.under_construction.len());
        for mut facility in self.under_construction.drain(..) {
            match facility.advance() {
                ConstructionProgress::InProgress { .. } => still_building.push(facility),
                ConstructionProgress::Completed => {
                    self.scores += facility.scores();
                    tick.completed.push(facility.name().to_string());
                    self.completed.push(facility);
                }
                // Scores were credited when it completed
                ConstructionProgress::AlreadyOperational => self.completed.push(facility),
            }
        }
        self.under_construction = still_building;

        // 3. Refresh availability
        self.status = if self.under_construction.len() == limit {
            PlanStatus::Busy
        } else {
            PlanStatus::Available
        };

        if !tick.admitted.is_empty() || !tick.completed.is_empty() {
            tracing::debug!(
                plan = %self.id,
                admitted = ?tick.admitted,
                completed = ?tick.completed,
                "Plan advanced"
            );
        }

        tick
    }

    /// Replace the selection policy; rejected when the kind is unchanged
    pub fn set_policy(&mut self, policy: Box<dyn SelectionPolicy>) -> Result<PolicyKind, SimError> {
        if self.policy.same_kind(policy.as_ref()) {
            return Err(SimError::SamePolicy(self.id, policy.kind().to_string()));
        }
        let previous = self.policy.kind();
        self.policy = policy;
        tracing::info!(
            plan = %self.id,
            "Policy changed from {} to {}",
            previous,
            self.policy.kind()
        );
        Ok(previous)
    }

    pub fn id(&self) -> PlanId {
        self.id
    }

    pub fn settlement(&self) -> &Settlement {
        &self.settlement
    }

    pub fn policy(&self) -> &dyn SelectionPolicy {
        self.policy.as_ref()
    }

    pub fn policy_kind(&self) -> PolicyKind {
        self.policy.kind()
    }

    pub fn status(&self) -> PlanStatus {
        self.status
    }

    pub fn construction_limit(&self) -> usize {
        self.settlement.construction_limit()
    }

    pub fn under_construction(&self) -> &[Facility] {
        &self.under_construction
    }

    pub fn completed(&self) -> &[Facility] {
        &self.completed
    }

    pub fn scores(&self) -> ScoreTotals {
        self.scores
    }

    /// Full status text including every facility
    pub fn status_report(&self) -> String {
        let mut out = self.summary().to_string();
        out.push_str("Operational Facilities:\n");
        for facility in &self.completed {
            out.push_str(&format!(" - {}\n", facility));
        }
        out.push_str("Under Construction Facilities:\n");
        for facility in &self.under_construction {
            out.push_str(&format!(" - {}\n", facility));
        }
        out
    }

    pub fn summary(&self) -> PlanSummary {
        PlanSummary {
            plan_id: self.id,
            settlement: self.settlement.name().to_string(),
            status: self.status,
            policy: self.policy.kind(),
            life_quality_score: self.scores.life_quality,
            economy_score: self.scores.economy,
            environment_score: self.scores.environment,
        }
    }
}

/// Read-only projection of a plan's headline numbers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanSummary {
    pub plan_id: PlanId,
    pub settlement: String,
    pub status: PlanStatus,
    pub policy: PolicyKind,
    pub life_quality_score: u64,
    pub economy_score: u64,
    pub environment_score: u64,
}

impl std::fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "PlanID: {}", self.plan_id)?;
        writeln!(f, "SettlementName: {}", self.settlement)?;
        writeln!(f, "PlanStatus: {}", self.status)?;
        writeln!(f, "SelectionPolicy: {}", self.policy)?;
        writeln!(f, "LifeQualityScore: {}", self.life_quality_score)?;
        writeln!(f, "EconomyScore: {}", self.economy_score)?;
        writeln!(f, "EnvironmentScore: {}", self.environment_score)
    }
}

//! Actions - discrete, recordable requests against a session
//!
//! Each external command becomes one [`Action`]. Successful actions are
//! cloned into the simulation's action log; failed ones never are.

use serde::Serialize;

use crate::city::{FacilityCategory, PlanSummary, SettlementTier};
use crate::core::types::PlanId;

/// A request the command layer can make of the simulation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Action {
    AddSettlement {
        name: String,
        tier: SettlementTier,
    },
    AddFacility {
        name: String,
        category: FacilityCategory,
        cost: i64,
        life_quality: i64,
        economy: i64,
        environment: i64,
    },
    AddPlan {
        settlement: String,
        policy: String,
    },
    SimulateStep {
        ticks: u32,
    },
    ChangePlanPolicy {
        plan_id: PlanId,
        policy: String,
    },
    PrintPlanStatus {
        plan_id: PlanId,
    },
    PrintActionsLog,
    Close,
    BackupSimulation,
    RestoreSimulation,
}

impl Action {
    /// Whether a successful run of this action is appended to the log
    pub fn is_logged(&self) -> bool {
        !matches!(self, Action::PrintActionsLog)
    }
}

/// Renders the command line that `parse_command` reads back into this action
impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::AddSettlement { name, tier } => {
                write!(f, "settlement {} {}", name, tier.code())
            }
            Action::AddFacility {
                name,
                category,
                cost,
                life_quality,
                economy,
                environment,
            } => write!(
                f,
                "facility {} {} {} {} {} {}",
                name,
                category.code(),
                cost,
                life_quality,
                economy,
                environment
            ),
            Action::AddPlan { settlement, policy } => write!(f, "plan {} {}", settlement, policy),
            Action::SimulateStep { ticks } => write!(f, "step {}", ticks),
            Action::ChangePlanPolicy { plan_id, policy } => {
                write!(f, "changePolicy {} {}", plan_id, policy)
            }
            Action::PrintPlanStatus { plan_id } => write!(f, "planStatus {}", plan_id),
            Action::PrintActionsLog => f.write_str("log"),
            Action::Close => f.write_str("close"),
            Action::BackupSimulation => f.write_str("backup"),
            Action::RestoreSimulation => f.write_str("restore"),
        }
    }
}

/// Outcome of an action attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ActionStatus {
    Completed,
    Error(String),
}

impl std::fmt::Display for ActionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionStatus::Completed => f.write_str("COMPLETED"),
            ActionStatus::Error(msg) => write!(f, "ERROR: {}", msg),
        }
    }
}

/// An action together with how it ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionRecord {
    pub action: Action,
    pub status: ActionStatus,
}

impl ActionRecord {
    pub fn completed(action: Action) -> Self {
        Self {
            action,
            status: ActionStatus::Completed,
        }
    }

    pub fn failed(action: Action, message: impl Into<String>) -> Self {
        Self {
            action,
            status: ActionStatus::Error(message.into()),
        }
    }
}

impl std::fmt::Display for ActionRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.action, self.status)
    }
}

/// What a completed action hands back to the command layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutput {
    /// Nothing to show
    None,
    /// Text for the user
    Text(String),
    /// Final per-plan results, produced by `close`
    Results(Vec<PlanSummary>),
}

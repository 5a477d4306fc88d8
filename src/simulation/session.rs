//! Session - the live simulation plus its single backup slot

use crate::city::{FacilityType, Settlement};
use crate::core::error::{Result, SimError};
use crate::policy::PolicyKind;
use crate::simulation::actions::{Action, ActionOutput, ActionRecord};
use crate::simulation::state::Simulation;

/// Owns the live simulation and at most one backup of it
///
/// Backup stores a deep copy, replacing any earlier one. Restore exchanges
/// the live simulation with the backup, so the state that was live becomes
/// the new backup.
#[derive(Debug, Default)]
pub struct Session {
    live: Simulation,
    backup: Option<Simulation>,
    last_failure: Option<ActionRecord>,
}

impl Session {
    pub fn new(simulation: Simulation) -> Self {
        Self {
            live: simulation,
            backup: None,
            last_failure: None,
        }
    }

    pub fn simulation(&self) -> &Simulation {
        &self.live
    }

    /// Direct access for seeding, bypassing the action log
    pub fn simulation_mut(&mut self) -> &mut Simulation {
        &mut self.live
    }

    pub fn backup(&self) -> Option<&Simulation> {
        self.backup.as_ref()
    }

    pub fn has_backup(&self) -> bool {
        self.backup.is_some()
    }

    /// Most recent rejected action, if any
    pub fn last_failure(&self) -> Option<&ActionRecord> {
        self.last_failure.as_ref()
    }

    pub fn is_running(&self) -> bool {
        self.live.is_running()
    }

    /// Run an action; on success it is appended to the live action log
    pub fn execute(&mut self, action: Action) -> Result<ActionOutput> {
        match self.apply(&action) {
            Ok(output) => {
                if action.is_logged() {
                    self.live.record(ActionRecord::completed(action));
                }
                Ok(output)
            }
            Err(e) => {
                tracing::warn!(action = %action, "Action failed: {}", e);
                self.last_failure = Some(ActionRecord::failed(action, e.to_string()));
                Err(e)
            }
        }
    }

    fn apply(&mut self, action: &Action) -> Result<ActionOutput> {
        match action {
            Action::AddSettlement { name, tier } => {
                self.live
                    .add_settlement(Settlement::new(name.clone(), *tier))?;
                Ok(ActionOutput::None)
            }
            Action::AddFacility {
                name,
                category,
                cost,
                life_quality,
                economy,
                environment,
            } => {
                let facility_type = FacilityType::from_raw(
                    name.clone(),
                    *category,
                    *cost,
                    *life_quality,
                    *economy,
                    *environment,
                )?;
                self.live.add_facility(facility_type)?;
                Ok(ActionOutput::None)
            }
            Action::AddPlan { settlement, policy } => {
                let kind: PolicyKind = policy.parse()?;
                let id = self.live.add_plan(settlement, kind)?;
                Ok(ActionOutput::Text(format!(
                    "Plan {} created for settlement {} with policy {}",
                    id, settlement, kind
                )))
            }
            Action::SimulateStep { ticks } => {
                self.live.advance(*ticks)?;
                Ok(ActionOutput::None)
            }
            Action::ChangePlanPolicy { plan_id, policy } => {
                let kind: PolicyKind = policy.parse()?;
                let previous = self.live.change_policy(*plan_id, kind)?;
                Ok(ActionOutput::Text(format!(
                    "Plan: {}\nPrevious policy: {}\nNew policy: {}",
                    plan_id, previous, kind
                )))
            }
            Action::PrintPlanStatus { plan_id } => {
                let plan = self.live.plan(*plan_id)?;
                Ok(ActionOutput::Text(plan.status_report()))
            }
            Action::PrintActionsLog => {
                let lines: Vec<String> = self
                    .live
                    .actions_log()
                    .iter()
                    .map(|record| record.to_string())
                    .collect();
                Ok(ActionOutput::Text(lines.join("\n")))
            }
            Action::Close => {
                let results = self.live.plans().iter().map(|p| p.summary()).collect();
                self.live.close();
                tracing::info!(tick = self.live.current_tick(), "Simulation closed");
                Ok(ActionOutput::Results(results))
            }
            Action::BackupSimulation => {
                self.backup = Some(self.live.clone());
                tracing::info!(tick = self.live.current_tick(), "Backup taken");
                Ok(ActionOutput::None)
            }
            Action::RestoreSimulation => {
                let backup = self.backup.as_mut().ok_or(SimError::NoBackup)?;
                std::mem::swap(&mut self.live, backup);
                tracing::info!(tick = self.live.current_tick(), "Backup restored");
                Ok(ActionOutput::None)
            }
        }
    }
}

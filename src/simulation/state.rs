//! Simulation state - registries, plans and the action log

use ahash::AHashMap;

use crate::city::{FacilityCatalog, FacilityType, Plan, PlanTick, Settlement};
use crate::core::error::{Result, SimError};
use crate::core::types::{PlanId, Tick};
use crate::policy::PolicyKind;
use crate::simulation::actions::ActionRecord;

/// Everything a running simulation owns
///
/// Cloning produces a fully independent deep copy: plans clone their
/// policies and facilities, the log clones every recorded action.
#[derive(Debug, Clone, Default)]
pub struct Simulation {
    running: bool,
    current_tick: Tick,
    next_plan_id: PlanId,
    settlements: Vec<Settlement>,
    settlement_index: AHashMap<String, usize>,
    catalog: FacilityCatalog,
    plans: Vec<Plan>,
    actions_log: Vec<ActionRecord>,
}

impl Simulation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        self.running = true;
    }

    pub fn close(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Ticks simulated so far
    pub fn current_tick(&self) -> Tick {
        self.current_tick
    }

    pub fn add_settlement(&mut self, settlement: Settlement) -> Result<()> {
        if self.settlement_index.contains_key(settlement.name()) {
            return Err(SimError::DuplicateSettlement(settlement.name().to_string()));
        }
        tracing::info!("Registered {}", settlement);
        self.settlement_index
            .insert(settlement.name().to_string(), self.settlements.len());
        self.settlements.push(settlement);
        Ok(())
    }

    pub fn add_facility(&mut self, facility_type: FacilityType) -> Result<()> {
        let name = facility_type.name().to_string();
        self.catalog.register(facility_type)?;
        tracing::info!(facility = %name, "Registered facility type");
        Ok(())
    }

    /// Create a plan on an existing settlement, returning its id
    pub fn add_plan(&mut self, settlement_name: &str, policy: PolicyKind) -> Result<PlanId> {
        let settlement = self
            .settlement(settlement_name)
            .ok_or_else(|| SimError::UnknownSettlement(settlement_name.to_string()))?
            .clone();

        let id = self.next_plan_id;
        self.next_plan_id = id.next();
        self.plans.push(Plan::new(id, settlement, policy.create()));

        tracing::info!(
            plan = %id,
            "Plan created for settlement {} with policy {}",
            settlement_name,
            policy
        );
        Ok(id)
    }

    /// Swap the selection policy of a plan
    pub fn change_policy(&mut self, plan_id: PlanId, policy: PolicyKind) -> Result<PolicyKind> {
        self.plan_mut(plan_id)?.set_policy(policy.create())
    }

    /// Advance every plan once, in creation order
    pub fn step(&mut self) -> Vec<PlanTick> {
        self.current_tick += 1;
        let catalog = &self.catalog;
        self.plans.iter_mut().map(|plan| plan.step(catalog)).collect()
    }

    /// Run `ticks` whole-simulation steps
    pub fn advance(&mut self, ticks: u32) -> Result<()> {
        if ticks == 0 {
            return Err(SimError::InvalidTickCount(0));
        }
        for _ in 0..ticks {
            self.step();
        }
        tracing::debug!(tick = self.current_tick, "Advanced {} ticks", ticks);
        Ok(())
    }

    pub fn settlement(&self, name: &str) -> Option<&Settlement> {
        self.settlement_index
            .get(name)
            .and_then(|&i| self.settlements.get(i))
    }

    pub fn has_settlement(&self, name: &str) -> bool {
        self.settlement_index.contains_key(name)
    }

    pub fn settlements(&self) -> &[Settlement] {
        &self.settlements
    }

    pub fn catalog(&self) -> &FacilityCatalog {
        &self.catalog
    }

    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }

    pub fn plan(&self, id: PlanId) -> Result<&Plan> {
        self.plans
            .iter()
            .find(|p| p.id() == id)
            .ok_or(SimError::UnknownPlan(id))
    }

    fn plan_mut(&mut self, id: PlanId) -> Result<&mut Plan> {
        self.plans
            .iter_mut()
            .find(|p| p.id() == id)
            .ok_or(SimError::UnknownPlan(id))
    }

    pub fn actions_log(&self) -> &[ActionRecord] {
        &self.actions_log
    }

    pub(crate) fn record(&mut self, record: ActionRecord) {
        self.actions_log.push(record);
    }
}

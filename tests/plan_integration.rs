//! Integration tests for plans and selection policies
//!
//! These tests drive whole simulations through `Simulation` and check:
//! - Admission and completion of facilities across ticks
//! - Construction limits per settlement tier
//! - How each selection policy walks the shared catalog

use civic_planner::city::{
    FacilityCategory, FacilityStatus, FacilityType, PlanStatus, Settlement, SettlementTier,
};
use civic_planner::core::types::{PlanId, ScoreTotals, Scores};
use civic_planner::policy::PolicyKind;
use civic_planner::simulation::Simulation;

fn facility(name: &str, category: FacilityCategory, cost: u32, scores: [u32; 3]) -> FacilityType {
    FacilityType::new(name, category, cost, Scores::new(scores[0], scores[1], scores[2]))
        .expect("valid facility")
}

fn simulation_with(tier: SettlementTier, catalog: Vec<FacilityType>) -> Simulation {
    let mut sim = Simulation::new();
    sim.open();
    sim.add_settlement(Settlement::new("Arcadia", tier)).unwrap();
    for facility_type in catalog {
        sim.add_facility(facility_type).unwrap();
    }
    sim
}

// ============================================================================
// Construction Workflow
// ============================================================================

/// A cost-1 facility is admitted and finishes within the same tick
#[test]
fn test_single_tick_facility_completes_immediately() {
    let mut sim = simulation_with(
        SettlementTier::Village,
        vec![facility("park", FacilityCategory::Environment, 1, [0, 0, 5])],
    );
    let id = sim.add_plan("Arcadia", PolicyKind::Naive).unwrap();

    sim.advance(1).unwrap();

    let plan = sim.plan(id).unwrap();
    assert_eq!(plan.scores().environment, 5);
    assert!(plan.under_construction().is_empty());
    assert_eq!(plan.completed().len(), 1);
    assert_eq!(plan.completed()[0].status(), FacilityStatus::Operational);
    assert_eq!(plan.status(), PlanStatus::Available);
}

/// A cost-2 facility spends one tick under construction before completing
#[test]
fn test_two_tick_facility_completes_on_second_tick() {
    let mut sim = simulation_with(
        SettlementTier::Village,
        vec![facility("park", FacilityCategory::Environment, 2, [0, 0, 5])],
    );
    let id = sim.add_plan("Arcadia", PolicyKind::Naive).unwrap();

    sim.advance(1).unwrap();
    {
        let plan = sim.plan(id).unwrap();
        assert_eq!(plan.under_construction().len(), 1);
        assert_eq!(plan.under_construction()[0].time_left(), 1);
        assert_eq!(plan.scores(), ScoreTotals::default());
        assert_eq!(plan.status(), PlanStatus::Busy);
    }

    sim.advance(1).unwrap();
    let plan = sim.plan(id).unwrap();
    assert_eq!(plan.scores().environment, 5);
    assert_eq!(plan.completed().len(), 1);
    assert_eq!(sim.current_tick(), 2);
}

/// Each tier admits up to its own limit of concurrent constructions
#[test]
fn test_construction_limit_per_tier() {
    for (tier, limit) in [
        (SettlementTier::Village, 1),
        (SettlementTier::City, 2),
        (SettlementTier::Metropolis, 3),
    ] {
        let mut sim = simulation_with(
            tier,
            vec![facility("tower", FacilityCategory::Economy, 10, [0, 4, 0])],
        );
        let id = sim.add_plan("Arcadia", PolicyKind::Naive).unwrap();

        sim.advance(3).unwrap();

        let plan = sim.plan(id).unwrap();
        assert_eq!(plan.under_construction().len(), limit);
        assert_eq!(plan.status(), PlanStatus::Busy);
        assert!(plan.completed().is_empty());
    }
}

/// Plans on the same settlement evolve independently
#[test]
fn test_plans_are_independent() {
    let mut sim = simulation_with(
        SettlementTier::City,
        vec![
            facility("park", FacilityCategory::Environment, 1, [0, 0, 5]),
            facility("mall", FacilityCategory::Economy, 1, [1, 6, 0]),
        ],
    );
    let naive = sim.add_plan("Arcadia", PolicyKind::Naive).unwrap();
    let economy = sim.add_plan("Arcadia", PolicyKind::Economy).unwrap();
    assert_eq!(naive, PlanId(0));
    assert_eq!(economy, PlanId(1));

    sim.advance(2).unwrap();

    // Naive alternates park/mall twice; economy only ever builds malls
    assert_eq!(sim.plan(naive).unwrap().scores(), ScoreTotals::new(2, 12, 10));
    assert_eq!(sim.plan(economy).unwrap().scores(), ScoreTotals::new(4, 24, 0));
}

/// A plan with nothing eligible simply stays idle
#[test]
fn test_plan_with_no_eligible_facility_stays_available() {
    let mut sim = simulation_with(
        SettlementTier::Metropolis,
        vec![facility("mall", FacilityCategory::Economy, 1, [1, 6, 0])],
    );
    let id = sim.add_plan("Arcadia", PolicyKind::Sustainability).unwrap();

    sim.advance(5).unwrap();

    let plan = sim.plan(id).unwrap();
    assert!(plan.under_construction().is_empty());
    assert!(plan.completed().is_empty());
    assert_eq!(plan.status(), PlanStatus::Available);
}

// ============================================================================
// Selection Policies
// ============================================================================

/// Naive selection cycles through the catalog in insertion order
#[test]
fn test_naive_policy_round_robin() {
    let mut sim = simulation_with(
        SettlementTier::Village,
        vec![
            facility("park", FacilityCategory::Environment, 1, [0, 0, 1]),
            facility("mall", FacilityCategory::Economy, 1, [0, 1, 0]),
            facility("school", FacilityCategory::LifeQuality, 1, [1, 0, 0]),
        ],
    );
    let id = sim.add_plan("Arcadia", PolicyKind::Naive).unwrap();

    sim.advance(4).unwrap();

    let names: Vec<&str> = sim
        .plan(id)
        .unwrap()
        .completed()
        .iter()
        .map(|f| f.name())
        .collect();
    assert_eq!(names, vec!["park", "mall", "school", "park"]);
}

/// Sustainability skips non-environment entries and wraps around
#[test]
fn test_sustainability_policy_wraps_to_environment_entries() {
    let mut sim = simulation_with(
        SettlementTier::Village,
        vec![
            facility("forest", FacilityCategory::Environment, 1, [0, 0, 3]),
            facility("mall", FacilityCategory::Economy, 1, [0, 6, 0]),
            facility("lake", FacilityCategory::Environment, 1, [1, 0, 4]),
        ],
    );
    let id = sim.add_plan("Arcadia", PolicyKind::Sustainability).unwrap();

    sim.advance(3).unwrap();

    let names: Vec<&str> = sim
        .plan(id)
        .unwrap()
        .completed()
        .iter()
        .map(|f| f.name())
        .collect();
    assert_eq!(names, vec!["forest", "lake", "forest"]);
    assert_eq!(sim.plan(id).unwrap().scores().economy, 0);
}

/// Balanced selection keeps the three dimensions close together
#[test]
fn test_balanced_policy_evens_out_scores() {
    let mut sim = simulation_with(
        SettlementTier::Village,
        vec![
            facility("park", FacilityCategory::Environment, 1, [0, 0, 5]),
            facility("mall", FacilityCategory::Economy, 1, [0, 5, 0]),
            facility("school", FacilityCategory::LifeQuality, 1, [5, 0, 0]),
        ],
    );
    let id = sim.add_plan("Arcadia", PolicyKind::Balanced).unwrap();

    sim.advance(3).unwrap();

    // Ties resolve to catalog order, then the lagging dimensions catch up
    let names: Vec<&str> = sim
        .plan(id)
        .unwrap()
        .completed()
        .iter()
        .map(|f| f.name())
        .collect();
    assert_eq!(names, vec!["park", "mall", "school"]);
    assert_eq!(sim.plan(id).unwrap().scores(), ScoreTotals::new(5, 5, 5));
}

/// Balanced accumulators only move for facilities that were admitted
#[test]
fn test_balanced_policy_commits_only_admitted_facilities() {
    let mut sim = simulation_with(
        SettlementTier::Village,
        vec![
            facility("park", FacilityCategory::Environment, 3, [0, 0, 5]),
            facility("mall", FacilityCategory::Economy, 3, [0, 5, 0]),
        ],
    );
    let id = sim.add_plan("Arcadia", PolicyKind::Balanced).unwrap();

    // Park holds the only slot until it completes on tick 3; tick 4 sees
    // environment already ahead and picks the mall
    sim.advance(4).unwrap();

    let plan = sim.plan(id).unwrap();
    assert_eq!(plan.completed()[0].name(), "park");
    assert_eq!(plan.under_construction()[0].name(), "mall");
}

/// Switching policy keeps existing constructions and changes future picks
#[test]
fn test_change_policy_mid_run() {
    let mut sim = simulation_with(
        SettlementTier::Village,
        vec![
            facility("park", FacilityCategory::Environment, 2, [0, 0, 5]),
            facility("mall", FacilityCategory::Economy, 1, [0, 6, 0]),
        ],
    );
    let id = sim.add_plan("Arcadia", PolicyKind::Sustainability).unwrap();

    sim.advance(1).unwrap();
    let previous = sim.change_policy(id, PolicyKind::Economy).unwrap();
    assert_eq!(previous, PolicyKind::Sustainability);

    sim.advance(2).unwrap();

    let plan = sim.plan(id).unwrap();
    assert_eq!(plan.policy_kind(), PolicyKind::Economy);
    let names: Vec<&str> = plan.completed().iter().map(|f| f.name()).collect();
    assert_eq!(names, vec!["park", "mall"]);
}

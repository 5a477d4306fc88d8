//! Core type definitions used throughout the codebase

use serde::Serialize;

/// Simulation tick counter
pub type Tick = u64;

/// Unique identifier for plans, handed out in creation order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct PlanId(pub u32);

impl PlanId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// The id that follows this one
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for PlanId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Quality-of-life / economy / environment score triple of one facility type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Scores {
    pub life_quality: u32,
    pub economy: u32,
    pub environment: u32,
}

impl Scores {
    pub fn new(life_quality: u32, economy: u32, environment: u32) -> Self {
        Self {
            life_quality,
            economy,
            environment,
        }
    }

    pub fn as_array(&self) -> [u32; 3] {
        [self.life_quality, self.economy, self.environment]
    }
}

/// Running score totals of a plan
///
/// Widened to `u64` and saturating, so no run of completions can overflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ScoreTotals {
    pub life_quality: u64,
    pub economy: u64,
    pub environment: u64,
}

impl ScoreTotals {
    pub fn new(life_quality: u64, economy: u64, environment: u64) -> Self {
        Self {
            life_quality,
            economy,
            environment,
        }
    }
}

impl std::ops::AddAssign<Scores> for ScoreTotals {
    fn add_assign(&mut self, rhs: Scores) {
        self.life_quality = self.life_quality.saturating_add(u64::from(rhs.life_quality));
        self.economy = self.economy.saturating_add(u64::from(rhs.economy));
        self.environment = self.environment.saturating_add(u64::from(rhs.environment));
    }
}

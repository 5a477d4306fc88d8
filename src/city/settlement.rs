//! Settlements - named sites that plans build on

use serde::Serialize;

use crate::core::error::SimError;

/// Size tier of a settlement
///
/// The tier is the only thing that shapes how a plan behaves on it:
/// it fixes how many facilities may be under construction at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum SettlementTier {
    Village = 1,
    City = 2,
    Metropolis = 3,
}

impl SettlementTier {
    /// Map the collaborator's tier code (1 = small/village, 2 = medium/city, 3 = large/metropolis)
    pub fn from_code(code: i64) -> Result<Self, SimError> {
        match code {
            1 => Ok(SettlementTier::Village),
            2 => Ok(SettlementTier::City),
            3 => Ok(SettlementTier::Metropolis),
            _ => Err(SimError::InvalidCode {
                kind: "settlement tier",
                code,
            }),
        }
    }

    /// Rank of the tier, 1 for the smallest through 3 for the largest
    pub fn rank(&self) -> usize {
        *self as usize
    }

    /// Inverse of [`SettlementTier::from_code`]
    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// Maximum number of facilities a plan may have under construction
    pub fn construction_limit(&self) -> usize {
        self.rank()
    }

    pub fn name(&self) -> &'static str {
        match self {
            SettlementTier::Village => "Village",
            SettlementTier::City => "City",
            SettlementTier::Metropolis => "Metropolis",
        }
    }
}

/// A named settlement; immutable once registered
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settlement {
    name: String,
    tier: SettlementTier,
}

impl Settlement {
    pub fn new(name: impl Into<String>, tier: SettlementTier) -> Self {
        Self {
            name: name.into(),
            tier,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tier(&self) -> SettlementTier {
        self.tier
    }

    pub fn construction_limit(&self) -> usize {
        self.tier.construction_limit()
    }
}

impl std::fmt::Display for Settlement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Settlement {} is a {}", self.name, self.tier.name())
    }
}

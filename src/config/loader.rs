//! Load starting scenarios from disk
//!
//! Two formats are accepted. Files ending in `.toml` are read as a
//! [`ScenarioFile`]; anything else is read line by line using the same
//! syntax as the shell (`settlement`, `facility` and `plan` lines only).

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::city::{FacilityCategory, FacilityType, Settlement, SettlementTier};
use crate::command::{parse_command, ParseError};
use crate::core::error::SimError;
use crate::policy::PolicyKind;
use crate::simulation::{Action, Simulation};

/// Errors that can occur when loading a scenario
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    /// A line of a line-format scenario could not be applied
    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: ParseError,
    },
    /// The simulation refused an entry
    #[error("Rejected entry: {0}")]
    Rejected(#[from] SimError),
}

/// Load a scenario file, picking the format from its extension
pub fn load_scenario(path: &Path) -> Result<Simulation, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let is_toml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    let simulation = if is_toml {
        parse_toml_scenario(&content)?
    } else {
        parse_line_scenario(&content)?
    };

    tracing::info!(
        path = %path.display(),
        settlements = simulation.settlements().len(),
        facilities = simulation.catalog().len(),
        plans = simulation.plans().len(),
        "Scenario loaded"
    );
    Ok(simulation)
}

/// Parse the line-oriented scenario format
pub fn parse_line_scenario(content: &str) -> Result<Simulation, ConfigError> {
    let mut simulation = Simulation::new();

    for (index, text) in content.lines().enumerate() {
        let line = index + 1;
        let action = match parse_command(text) {
            Ok(Some(action)) => action,
            Ok(None) => continue,
            Err(ParseError::UnknownCommand(keyword)) => {
                tracing::warn!(line, "Unknown configuration line: {}", keyword);
                continue;
            }
            Err(source) => return Err(ConfigError::Line { line, source }),
        };

        apply_entry(&mut simulation, &action)
            .map_err(|e| ConfigError::Line {
                line,
                source: ParseError::Rejected(e),
            })?;
    }

    Ok(simulation)
}

fn apply_entry(simulation: &mut Simulation, action: &Action) -> Result<(), SimError> {
    match action {
        Action::AddSettlement { name, tier } => {
            simulation.add_settlement(Settlement::new(name.clone(), *tier))
        }
        Action::AddFacility {
            name,
            category,
            cost,
            life_quality,
            economy,
            environment,
        } => simulation.add_facility(FacilityType::from_raw(
            name.clone(),
            *category,
            *cost,
            *life_quality,
            *economy,
            *environment,
        )?),
        Action::AddPlan { settlement, policy } => {
            let kind: PolicyKind = policy.parse()?;
            simulation.add_plan(settlement, kind).map(|_| ())
        }
        other => {
            tracing::warn!("Ignoring non-configuration command in scenario: {}", other);
            Ok(())
        }
    }
}

/// TOML representation of a scenario file
#[derive(Debug, Default, Deserialize)]
pub struct ScenarioFile {
    #[serde(default)]
    pub settlements: Vec<TomlSettlement>,
    #[serde(default)]
    pub facilities: Vec<TomlFacility>,
    #[serde(default)]
    pub plans: Vec<TomlPlan>,
}

#[derive(Debug, Deserialize)]
pub struct TomlSettlement {
    pub name: String,
    pub tier: CodeOrName,
}

#[derive(Debug, Deserialize)]
pub struct TomlFacility {
    pub name: String,
    pub category: CodeOrName,
    pub cost: i64,
    #[serde(default)]
    pub life_quality: i64,
    #[serde(default)]
    pub economy: i64,
    #[serde(default)]
    pub environment: i64,
}

#[derive(Debug, Deserialize)]
pub struct TomlPlan {
    pub settlement: String,
    pub policy: String,
}

/// Either an integer code or a lowercase name
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CodeOrName {
    Code(i64),
    Name(String),
}

impl CodeOrName {
    fn into_tier(self) -> Result<SettlementTier, SimError> {
        match self {
            CodeOrName::Code(code) => SettlementTier::from_code(code),
            CodeOrName::Name(name) => match name.to_lowercase().as_str() {
                "village" | "small" => Ok(SettlementTier::Village),
                "city" | "medium" => Ok(SettlementTier::City),
                "metropolis" | "large" => Ok(SettlementTier::Metropolis),
                _ => Err(SimError::InvalidName {
                    kind: "settlement tier",
                    name,
                }),
            },
        }
    }

    fn into_category(self) -> Result<FacilityCategory, SimError> {
        match self {
            CodeOrName::Code(code) => FacilityCategory::from_code(code),
            CodeOrName::Name(name) => match name.to_lowercase().as_str() {
                "life_quality" | "quality_of_life" => Ok(FacilityCategory::LifeQuality),
                "economy" => Ok(FacilityCategory::Economy),
                "environment" => Ok(FacilityCategory::Environment),
                _ => Err(SimError::InvalidName {
                    kind: "facility category",
                    name,
                }),
            },
        }
    }
}

/// Parse the TOML scenario format
pub fn parse_toml_scenario(content: &str) -> Result<Simulation, ConfigError> {
    let file: ScenarioFile = toml::from_str(content)?;
    let mut simulation = Simulation::new();

    for settlement in file.settlements {
        let tier = settlement.tier.into_tier()?;
        simulation.add_settlement(Settlement::new(settlement.name, tier))?;
    }

    for facility in file.facilities {
        let category = facility.category.into_category()?;
        simulation.add_facility(FacilityType::from_raw(
            facility.name,
            category,
            facility.cost,
            facility.life_quality,
            facility.economy,
            facility.environment,
        )?)?;
    }

    for plan in file.plans {
        let kind: PolicyKind = plan.policy.parse()?;
        simulation.add_plan(&plan.settlement, kind)?;
    }

    Ok(simulation)
}

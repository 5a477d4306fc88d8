//! Command parsing - one line of shell text to one action

use thiserror::Error;

use crate::city::{FacilityCategory, SettlementTier};
use crate::core::error::SimError;
use crate::core::types::PlanId;
use crate::simulation::Action;

/// Errors produced while turning text into actions
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Invalid {command} command format, expected: {usage}")]
    MissingArguments {
        command: String,
        usage: &'static str,
    },

    #[error("Invalid number for {field}: {value}")]
    InvalidNumber { field: &'static str, value: String },

    #[error(transparent)]
    Rejected(#[from] SimError),
}

/// Split a line into whitespace-separated arguments
pub fn split_arguments(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// Parse one line of input
///
/// Returns `Ok(None)` for blank lines and `#` comments.
pub fn parse_command(line: &str) -> Result<Option<Action>, ParseError> {
    let args = split_arguments(line);
    let Some(&command) = args.first() else {
        return Ok(None);
    };
    if command.starts_with('#') {
        return Ok(None);
    }

    let action = match command {
        "settlement" => {
            expect_args(&args, 3, "settlement <name> <tier>")?;
            Action::AddSettlement {
                name: args[1].to_string(),
                tier: SettlementTier::from_code(number(args[2], "settlement tier")?)?,
            }
        }
        "facility" => {
            expect_args(
                &args,
                7,
                "facility <name> <category> <cost> <life_quality> <economy> <environment>",
            )?;
            Action::AddFacility {
                name: args[1].to_string(),
                category: FacilityCategory::from_code(number(args[2], "facility category")?)?,
                cost: number(args[3], "cost")?,
                life_quality: number(args[4], "life quality score")?,
                economy: number(args[5], "economy score")?,
                environment: number(args[6], "environment score")?,
            }
        }
        "plan" => {
            expect_args(&args, 3, "plan <settlement> <policy>")?;
            Action::AddPlan {
                settlement: args[1].to_string(),
                policy: args[2].to_string(),
            }
        }
        "step" => {
            expect_args(&args, 2, "step <ticks>")?;
            let ticks = number(args[1], "ticks")?;
            let ticks = u32::try_from(ticks)
                .ok()
                .filter(|&t| t > 0)
                .ok_or(SimError::InvalidTickCount(ticks))?;
            Action::SimulateStep { ticks }
        }
        "changePolicy" => {
            expect_args(&args, 3, "changePolicy <plan_id> <policy>")?;
            Action::ChangePlanPolicy {
                plan_id: plan_id(args[1])?,
                policy: args[2].to_string(),
            }
        }
        "planStatus" => {
            expect_args(&args, 2, "planStatus <plan_id>")?;
            Action::PrintPlanStatus {
                plan_id: plan_id(args[1])?,
            }
        }
        "log" => Action::PrintActionsLog,
        "close" => Action::Close,
        "backup" => Action::BackupSimulation,
        "restore" => Action::RestoreSimulation,
        other => return Err(ParseError::UnknownCommand(other.to_string())),
    };

    Ok(Some(action))
}

fn expect_args(args: &[&str], count: usize, usage: &'static str) -> Result<(), ParseError> {
    if args.len() < count {
        return Err(ParseError::MissingArguments {
            command: args[0].to_string(),
            usage,
        });
    }
    Ok(())
}

fn number(value: &str, field: &'static str) -> Result<i64, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

fn plan_id(value: &str) -> Result<PlanId, ParseError> {
    value
        .parse::<u32>()
        .map(PlanId)
        .map_err(|_| ParseError::InvalidNumber {
            field: "plan id",
            value: value.to_string(),
        })
}

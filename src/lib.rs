//! Civic Planner - Turn-Based Urban Development Simulation
//!
//! Settlements grow through plans that admit facilities from a shared
//! catalog, chosen by a pluggable selection policy. Every simulated tick
//! advances construction and accumulates quality scores.

pub mod city;
pub mod command;
pub mod config;
pub mod core;
pub mod policy;
pub mod simulation;

//! Redemption Darts front end.
//!
//! Drives the [`redemption_core`] scoring engine the way a scorekeeper
//! would: it rotates turns, collects one redemption shot from each trailing
//! player, resolves the batch and reports a status line after every throw.
//!
//! # Architecture
//!
//! - **Controller**: turn rotation and redemption collection
//! - **Console**: line-oriented interactive play over any reader/writer
//! - **Script**: replay of a recorded game from JSON
//! - **Config**: rule overrides loaded from TOML

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod console;
mod controller;
mod script;

// Crate-level exports - Configuration
pub use config::{ConfigError, RulesConfig};

// Crate-level exports - Turn control
pub use controller::{TurnController, TurnError, TurnEvent, TurnReport};

// Crate-level exports - Front ends
pub use console::{parse_points, run_console};
pub use script::{Replay, Script, ScriptError};

//! Calculator Configuration Module
//!
//! Deployment settings loaded from TOML: server bind address, the email
//! delivery service, the sheet logging endpoint, report output and the
//! mailto contact. The projection model itself is fixed and not configurable.
//!
//! ## Loading Order
//!
//! 1. `LEAK_CONFIG` environment variable (path to TOML file)
//! 2. `calculator.toml` in the current working directory
//! 3. Built-in defaults
//!
//! ## Usage
//!
//! ```ignore
//! let config = CalculatorConfig::load();
//! let coordinator = SubmissionCoordinator::from_config(&config)?;
//! ```

mod calculator_config;
pub mod defaults;
pub mod validation;

pub use calculator_config::*;

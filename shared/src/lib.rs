//! Shared logic for the sunfall site apps
//!
//! Houses the phase clock driving the day/night cycle, timezone helpers for
//! seeding the phase from local time, and configuration persistence.

pub mod config;
pub mod phase;

pub use config::{config_path, load_config, save_config, ConfigError};
pub use phase::{
    parse_timezone, phase_for_timezone, phase_for_timezone_at, PhaseClock, DEFAULT_CYCLE_SECONDS,
};

//! Toolstep Settings Crate
//!
//! Handles configuration files holding generator and normalizer defaults.

pub mod config;
pub mod error;

pub use config::{Config, GeneratorSettings, NormalizerSettings};
pub use error::{SettingsError, SettingsResult};

//! Domain layer for the Columuse gateway configuration
//!
//! This module contains the configuration value object.

pub mod models;

//! # Palbot Config
//!
//! Type-safe configuration management for Palbot.
//!
//! This crate provides configuration loading from JSON, YAML or TOML files,
//! environment overrides, and validation of everything the bot needs before
//! it connects.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::*;
pub use schema::*;
pub use validator::*;

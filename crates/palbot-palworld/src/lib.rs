//! # Palbot Palworld
//!
//! Client for the Palworld dedicated server REST API.
//!
//! The bot only needs two read-only endpoints, `metrics` and `players`. Both
//! are plain authenticated GET requests decoded from JSON; failures are
//! reported once and never retried.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod models;
pub mod traits;

pub use client::*;
pub use models::*;
pub use traits::*;

//! # Palbot
//!
//! Discord bot that reports the status of a Palworld dedicated server.
//!
//! This crate wires the configuration, the Palworld client and the command
//! dispatcher to a serenity gateway client and owns the process lifecycle.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod bot;
pub mod error;
pub mod handler;
pub mod transport;

pub use bot::*;
pub use error::*;
pub use handler::*;
pub use transport::*;

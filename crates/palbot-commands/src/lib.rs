//! # Palbot Commands
//!
//! Command handling for Palbot and the gate every outbound reply passes.
//!
//! Replies are produced for the recognised slash commands and then offered to
//! the send gate: a global token bucket first, then a per-sender, per-command
//! cooldown that answers with a single notice per window.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod clock;
pub mod command;
pub mod cooldown;
pub mod dispatcher;
pub mod replies;
pub mod throttle;
pub mod transport;

pub use clock::*;
pub use command::*;
pub use cooldown::*;
pub use dispatcher::*;
pub use replies::*;
pub use throttle::*;
pub use transport::*;

//! # Palbot I18n
//!
//! Reply catalogues for Palbot using the Fluent localization system.
//!
//! Catalogues are embedded at compile time, so a running bot never depends on
//! locale files on disk. Messages missing from the selected locale fall back
//! to the default locale.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod locale;

pub use catalog::*;
pub use locale::*;

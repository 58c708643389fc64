//! Urna - A terminal client for a ledger-backed voting service.
//!
//! This crate mirrors the state of a remote voting backend into a terminal
//! interface: the open session, its candidates and tally, the global
//! candidate directory, the sealed ledger and its integrity verdict.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing the controller, DTOs and view services.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing the HTTP client and configuration.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "urna";

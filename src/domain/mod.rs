//! Domain layer with voting entities, errors, and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Status message definitions.
pub mod notification;
/// Port definitions.
pub mod ports;
/// Serde utilities.
pub mod serde_utils;

pub use entities::{ActiveVotingSession, GlobalCandidate, ResultEntry, ResultsReport};
pub use errors::RequestError;
pub use notification::{NotificationLevel, PendingClear};
pub use ports::{HttpPort, ViewPort};

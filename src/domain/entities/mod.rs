//! Voting entities decoded from backend responses.

mod candidate;
mod chain;
mod results;
mod session;

pub use candidate::GlobalCandidate;
pub use chain::{ChainBlock, IntegrityResult, blocks_from_value, render_chain};
pub use results::{PendingVotes, ResultEntry, ResultsReport};
pub use session::ActiveVotingSession;

//! Voting backend REST client.

mod client;

pub use client::{ResponseBody, VotingApiClient};

//! Data transfer objects for the application layer.

mod voting_dto;

pub use voting_dto::{ActionResponse, CandidateRequest, CastVoteRequest, StartVotingRequest};

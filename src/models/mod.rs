// Model exports
pub mod domain;

pub use domain::{CandidateProfile, JobPosting, MatchWeights, Scored, ScoredCandidate, ScoredJob};

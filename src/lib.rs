//! Career Match - job/candidate matching engine for the career guidance portal
//!
//! This library provides the scoring algorithm the portal uses to rank job
//! postings for a student and candidates for a job posting. A match score
//! is a weighted sum of five sub-scores (skills, education, experience,
//! interests, location), normalized to an integer in 0-100. Scoring is
//! pure and infallible: missing fields degrade to neutral defaults rather
//! than errors.

pub mod config;
pub mod core;
pub mod models;

// Re-export commonly used types
pub use crate::core::{calculate_job_match, match_reasons, Matcher};
pub use crate::models::{
    CandidateProfile, JobPosting, MatchWeights, Scored, ScoredCandidate, ScoredJob,
};

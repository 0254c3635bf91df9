// Core algorithm exports
pub mod matcher;
pub mod reasons;
pub mod scoring;
pub mod vocab;

pub use matcher::Matcher;
pub use reasons::match_reasons;
pub use scoring::{
    calculate_job_match, education_score, experience_score, interests_score, location_score,
    skills_score,
};

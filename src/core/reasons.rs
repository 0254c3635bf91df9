use crate::core::scoring::{education_score, experience_score, location_score, skills_score};
use crate::models::{CandidateProfile, JobPosting};

/// Human-readable reasons why a candidate/job pair scored the way it did
///
/// Reasons are emitted in a fixed order (skills, education, experience,
/// location) and only when the corresponding sub-score clears its
/// threshold. Interests contribute to the score but never produce a
/// reason. A pair with nothing going for it gets an empty list.
pub fn match_reasons(candidate: &CandidateProfile, job: &JobPosting) -> Vec<String> {
    let mut reasons = Vec::new();

    let skills = skills_score(&candidate.skills, &job.required_skills);
    if skills > 0.7 {
        reasons.push("Strong skills match".to_string());
    } else if skills > 0.4 {
        reasons.push("Partial skills match".to_string());
    }

    let education = education_score(&candidate.education, &job.education_required);
    if education == 1.0 {
        reasons.push("Meets education requirements".to_string());
    } else if education > 0.5 {
        reasons.push("Close to education requirements".to_string());
    }

    let experience = experience_score(candidate.experience, job.experience_required);
    if experience == 1.0 {
        reasons.push("Sufficient experience".to_string());
    } else if experience > 0.5 {
        reasons.push("Some relevant experience".to_string());
    }

    let location = location_score(&candidate.location, &job.location);
    if location > 0.7 {
        reasons.push("Location match".to_string());
    }

    reasons
}

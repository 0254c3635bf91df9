use crate::core::vocab::{category_synonyms, education_level};
use crate::models::{CandidateProfile, JobPosting, MatchWeights};

/// Calculate a match score (0-100) between a candidate and a job posting
///
/// Scoring formula:
/// score = round(100 * (
///     skills_score * 0.35 +        # required skills covered
///     education_score * 0.25 +     # ordinal level vs requirement
///     experience_score * 0.20 +    # years vs requirement
///     interests_score * 0.15 +     # job category vs interests
///     location_score * 0.05        # same city / same string
/// ))
///
/// Rounding is half away from zero, so a weighted sum of exactly 33.5
/// becomes 34. Missing fields behave as empty, never as an error.
pub fn calculate_job_match(
    candidate: &CandidateProfile,
    job: &JobPosting,
    weights: &MatchWeights,
) -> u8 {
    let skills = skills_score(&candidate.skills, &job.required_skills);
    let education = education_score(&candidate.education, &job.education_required);
    let experience = experience_score(candidate.experience, job.experience_required);
    let interests = interests_score(&candidate.interests, &job.category);
    let location = location_score(&candidate.location, &job.location);

    let total = (skills * weights.skills
        + education * weights.education
        + experience * weights.experience
        + interests * weights.interests
        + location * weights.location)
        * 100.0;

    total.round().clamp(0.0, 100.0) as u8
}

/// Skills sub-score (0-1): fraction of required skills the candidate covers
///
/// A required skill counts as covered when some candidate skill contains it
/// as a case-insensitive substring. The reverse direction is deliberately
/// not checked, so "JavaScript" covers a "Java" requirement but "Java" does
/// not cover a "JavaScript" requirement. No required skills means the
/// requirement is vacuously satisfied.
#[inline]
pub fn skills_score(candidate_skills: &[String], required_skills: &[String]) -> f64 {
    if required_skills.is_empty() {
        return 1.0;
    }

    let candidate_lower: Vec<String> = candidate_skills
        .iter()
        .map(|skill| skill.to_lowercase())
        .collect();

    let covered = required_skills
        .iter()
        .filter(|required| {
            let required = required.to_lowercase();
            candidate_lower.iter().any(|skill| skill.contains(&required))
        })
        .count();

    covered as f64 / required_skills.len() as f64
}

/// Education sub-score: 1.0 at or above the required level, 0.7 exactly one
/// level below, 0.3 otherwise
///
/// Levels come from the fixed ordinal vocabulary; unrecognized strings map
/// to level 0, so an unrecognized requirement is always met.
#[inline]
pub fn education_score(candidate_education: &str, education_required: &str) -> f64 {
    let candidate_level = education_level(candidate_education);
    let required_level = education_level(education_required);

    if candidate_level >= required_level {
        1.0
    } else if candidate_level + 1 == required_level {
        0.7
    } else {
        0.3
    }
}

/// Experience sub-score: 1.0 at or above the requirement, then 0.8 / 0.5 /
/// 0.2 at the 70% and 50% marks
///
/// A requirement of zero years is always met.
#[inline]
pub fn experience_score(candidate_years: u32, required_years: u32) -> f64 {
    let candidate = candidate_years as f64;
    let required = required_years as f64;

    if candidate >= required {
        1.0
    } else if candidate >= required * 0.7 {
        0.8
    } else if candidate >= required * 0.5 {
        0.5
    } else {
        0.2
    }
}

/// Interests sub-score: 1.0 when any interest overlaps the job category or
/// one of its synonyms, 0.3 when none do, 0.5 when the candidate listed no
/// interests at all (unknown, not a mismatch)
///
/// Overlap is a case-insensitive substring test in either direction.
/// Categories outside the synonym table are compared against themselves.
#[inline]
pub fn interests_score(interests: &[String], category: &str) -> f64 {
    if interests.is_empty() {
        return 0.5;
    }

    let category = category.to_lowercase();
    let matched = |term: &str| {
        interests.iter().any(|interest| {
            let interest = interest.to_lowercase();
            interest.contains(term) || term.contains(interest.as_str())
        })
    };

    let overlaps = match category_synonyms(&category) {
        Some(synonyms) => synonyms.iter().any(|synonym| matched(synonym)),
        None => matched(&category),
    };

    if overlaps {
        1.0
    } else {
        0.3
    }
}

/// Location sub-score: 1.0 for the same string, 0.8 for the same city with
/// a different region suffix, 0.3 for different cities, 0.5 when either
/// side is missing
///
/// The city token is everything before the first comma, trimmed. All
/// comparisons are case-insensitive.
#[inline]
pub fn location_score(candidate_location: &str, job_location: &str) -> f64 {
    if candidate_location.is_empty() || job_location.is_empty() {
        return 0.5;
    }

    let candidate = candidate_location.to_lowercase();
    let job = job_location.to_lowercase();

    if candidate == job {
        return 1.0;
    }

    let city = |location: &str| {
        location
            .split(',')
            .next()
            .unwrap_or("")
            .trim()
            .to_string()
    };

    if city(&candidate) == city(&job) {
        0.8
    } else {
        0.3
    }
}

use crate::core::reasons::match_reasons;
use crate::core::scoring::calculate_job_match;
use crate::models::{
    CandidateProfile, JobPosting, MatchWeights, Scored, ScoredCandidate, ScoredJob,
};

/// Matching orchestrator - scores records and produces ranked orderings
///
/// The matcher is stateless apart from its weights: every call is
/// independent, nothing is cached, and inputs are never mutated (records
/// are moved into their scored wrappers). It is safe to share across
/// threads.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: MatchWeights,
}

impl Matcher {
    pub fn new(weights: MatchWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: MatchWeights::default(),
        }
    }

    pub fn weights(&self) -> &MatchWeights {
        &self.weights
    }

    /// Score a single candidate/job pair (0-100)
    pub fn score(&self, candidate: &CandidateProfile, job: &JobPosting) -> u8 {
        calculate_job_match(candidate, job, &self.weights)
    }

    /// Rank job postings for a student, best match first
    ///
    /// Every input job comes back exactly once, augmented with its score.
    /// The sort is stable, so jobs with equal scores keep their input
    /// order.
    pub fn rank_jobs_for_student(
        &self,
        candidate: &CandidateProfile,
        jobs: Vec<JobPosting>,
    ) -> Vec<ScoredJob> {
        let mut ranked: Vec<ScoredJob> = jobs
            .into_iter()
            .map(|job| {
                let match_score = calculate_job_match(candidate, &job, &self.weights);
                Scored {
                    record: job,
                    match_score,
                }
            })
            .collect();

        ranked.sort_by(|a, b| b.match_score.cmp(&a.match_score));

        tracing::debug!(
            jobs = ranked.len(),
            top_score = ranked.first().map(|j| j.match_score).unwrap_or(0),
            "ranked jobs for student"
        );

        ranked
    }

    /// Rank candidates for a job posting, best match first
    ///
    /// Symmetric to [`Self::rank_jobs_for_student`].
    pub fn rank_students_for_job(
        &self,
        job: &JobPosting,
        candidates: Vec<CandidateProfile>,
    ) -> Vec<ScoredCandidate> {
        let mut ranked: Vec<ScoredCandidate> = candidates
            .into_iter()
            .map(|candidate| {
                let match_score = calculate_job_match(&candidate, job, &self.weights);
                Scored {
                    record: candidate,
                    match_score,
                }
            })
            .collect();

        ranked.sort_by(|a, b| b.match_score.cmp(&a.match_score));

        tracing::debug!(
            candidates = ranked.len(),
            top_score = ranked.first().map(|c| c.match_score).unwrap_or(0),
            "ranked candidates for job"
        );

        ranked
    }

    /// Explain a pairing with human-readable reason strings
    pub fn reasons(&self, candidate: &CandidateProfile, job: &JobPosting) -> Vec<String> {
        match_reasons(candidate, job)
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate() -> CandidateProfile {
        CandidateProfile {
            skills: vec!["JavaScript".to_string(), "React".to_string()],
            education: "bachelor".to_string(),
            experience: 3,
            interests: vec!["Technology".to_string()],
            location: "Maseru".to_string(),
        }
    }

    fn job(required_skill: &str, location: &str) -> JobPosting {
        JobPosting {
            required_skills: vec![required_skill.to_string()],
            education_required: "bachelor".to_string(),
            experience_required: 2,
            category: "Technology".to_string(),
            location: location.to_string(),
        }
    }

    #[test]
    fn test_rank_jobs_sorted_descending() {
        let matcher = Matcher::with_default_weights();
        let jobs = vec![
            job("Rust", "Berea"),       // weak skills + location
            job("JavaScript", "Maseru"), // perfect
            job("JavaScript", "Berea"),  // perfect skills, wrong city
        ];

        let ranked = matcher.rank_jobs_for_student(&candidate(), jobs);

        assert_eq!(ranked.len(), 3);
        for pair in ranked.windows(2) {
            assert!(pair[0].match_score >= pair[1].match_score);
        }
        assert_eq!(ranked[0].record.location, "Maseru");
        assert_eq!(ranked[0].match_score, 100);
    }

    #[test]
    fn test_ranked_scores_agree_with_single_scoring() {
        let matcher = Matcher::with_default_weights();
        let student = candidate();
        let jobs = vec![job("Python", "Maseru"), job("JavaScript", "Quthing")];

        let ranked = matcher.rank_jobs_for_student(&student, jobs);
        for scored in &ranked {
            assert_eq!(scored.match_score, matcher.score(&student, &scored.record));
        }
    }

    #[test]
    fn test_rank_students_symmetric() {
        let matcher = Matcher::with_default_weights();
        let posting = job("JavaScript", "Maseru");

        let weak = CandidateProfile {
            skills: vec!["Welding".to_string()],
            education: "high school".to_string(),
            experience: 0,
            interests: vec![],
            location: "Quthing".to_string(),
        };
        let candidates = vec![weak, candidate()];

        let ranked = matcher.rank_students_for_job(&posting, candidates);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].match_score, 100);
        assert!(ranked[0].match_score >= ranked[1].match_score);
    }

    #[test]
    fn test_equal_scores_keep_input_order() {
        let matcher = Matcher::with_default_weights();
        let jobs = vec![job("JavaScript", "Maseru"), job("React", "Maseru")];

        let ranked = matcher.rank_jobs_for_student(&candidate(), jobs);

        assert_eq!(ranked[0].match_score, ranked[1].match_score);
        assert_eq!(ranked[0].record.required_skills, vec!["JavaScript"]);
        assert_eq!(ranked[1].record.required_skills, vec!["React"]);
    }

    #[test]
    fn test_empty_input_ranks_to_empty_output() {
        let matcher = Matcher::default();
        assert!(matcher.rank_jobs_for_student(&candidate(), vec![]).is_empty());
        assert!(matcher
            .rank_students_for_job(&job("Python", "Maseru"), vec![])
            .is_empty());
    }

    #[test]
    fn test_custom_weights_change_ordering() {
        // Location-only weighting flips which job wins
        let location_only = Matcher::new(MatchWeights {
            skills: 0.0,
            education: 0.0,
            experience: 0.0,
            interests: 0.0,
            location: 1.0,
        });

        let jobs = vec![job("JavaScript", "Berea"), job("Rust", "Maseru")];
        let ranked = location_only.rank_jobs_for_student(&candidate(), jobs);

        assert_eq!(ranked[0].record.location, "Maseru");
        assert_eq!(ranked[0].match_score, 100);
        assert_eq!(ranked[1].match_score, 30);
    }
}

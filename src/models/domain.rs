use serde::{Deserialize, Serialize};

/// Student/candidate profile as stored by the portal
///
/// Every field defaults when absent: the scorer treats a missing field and
/// an empty field identically, so records straight out of the document
/// database never fail to deserialize.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub education: String,
    /// Years of experience
    #[serde(default)]
    pub experience: u32,
    #[serde(default)]
    pub interests: Vec<String>,
    /// Free-text "city[, region]" string
    #[serde(default)]
    pub location: String,
}

/// Job posting as stored by the portal
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobPosting {
    #[serde(rename = "requiredSkills", default)]
    pub required_skills: Vec<String>,
    #[serde(rename = "educationRequired", default)]
    pub education_required: String,
    /// Years of experience the posting asks for
    #[serde(rename = "experienceRequired", default)]
    pub experience_required: u32,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub location: String,
}

/// A record augmented with its computed match score
///
/// Serializes as the original record plus one extra `matchScore` field,
/// which is the shape the portal's dashboards consume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scored<T> {
    #[serde(flatten)]
    pub record: T,
    #[serde(rename = "matchScore")]
    pub match_score: u8,
}

/// A job ranked for a student
pub type ScoredJob = Scored<JobPosting>;

/// A candidate ranked for a job posting
pub type ScoredCandidate = Scored<CandidateProfile>;

/// Scoring weights for the five sub-scores
///
/// The weights are expected to sum to 1.0 so the weighted sum stays in
/// [0, 1] before scaling; `crate::config` validates this for configured
/// weights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchWeights {
    pub skills: f64,
    pub education: f64,
    pub experience: f64,
    pub interests: f64,
    pub location: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            skills: 0.35,
            education: 0.25,
            experience: 0.20,
            interests: 0.15,
            location: 0.05,
        }
    }
}

impl MatchWeights {
    /// Sum of all five weights
    pub fn total(&self) -> f64 {
        self.skills + self.education + self.experience + self.interests + self.location
    }
}

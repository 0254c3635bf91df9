//! Fixed lookup vocabularies used by the scorer.
//!
//! Both tables are keyed by lower-cased strings; callers lower-case before
//! lookup.

/// Map an education string to its ordinal level
///
/// Levels are ordered lowest to highest; anything outside the closed
/// vocabulary maps to 0. Comparison between levels (not the raw strings)
/// drives the education sub-score.
#[inline]
pub fn education_level(education: &str) -> u8 {
    match education.to_lowercase().as_str() {
        "high school" => 1,
        "diploma" => 2,
        "bachelor" => 3,
        "master" => 4,
        "phd" => 5,
        _ => 0,
    }
}

/// Synonym expansion for a job category
///
/// Returns the fixed synonym list for the 15 known portal categories, or
/// `None` for anything else (the caller falls back to the category string
/// itself). All entries are lower-cased.
pub fn category_synonyms(category: &str) -> Option<&'static [&'static str]> {
    let synonyms: &'static [&'static str] = match category {
        "technology" => &["technology", "tech", "it", "software", "computer", "programming"],
        "healthcare" => &["healthcare", "health", "medical", "medicine", "nursing", "clinical"],
        "education" => &["education", "teaching", "teacher", "academic", "training"],
        "finance" => &["finance", "financial", "accounting", "banking", "economics"],
        "business" => &["business", "management", "administration", "entrepreneurship", "commerce"],
        "agriculture" => &["agriculture", "farming", "agribusiness", "livestock", "horticulture"],
        "government" => &["government", "public service", "civil service", "policy"],
        "engineering" => &["engineering", "engineer", "mechanical", "electrical", "civil"],
        "hospitality" => &["hospitality", "hotel", "catering", "restaurant", "culinary"],
        "tourism" => &["tourism", "travel", "tour", "heritage"],
        "media" => &["media", "journalism", "broadcasting", "film", "communications"],
        "marketing" => &["marketing", "advertising", "sales", "branding"],
        "construction" => &["construction", "building", "architecture", "carpentry"],
        "design" => &["design", "graphic", "creative", "fashion", "ux"],
        "data science" => &["data science", "data", "analytics", "statistics", "machine learning"],
        _ => return None,
    };
    Some(synonyms)
}

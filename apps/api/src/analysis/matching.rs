//! Matching Engine — scores a resume against a role description.
//!
//! Algorithm:
//! 1. predicted role  = classifier applied to the resume text
//! 2. semantic score  = trunc(cosine(tfidf(resume), tfidf(role)) × 100), TF-IDF
//!    fitted jointly over the two texts with English stop words removed
//! 3. skill match     = catalog skills whose name is a substring of the resume,
//!    score = matched × 100 / total (0 for an empty catalog)
//! 4. overall score   = (semantic + skill match) / 2
//! 5. category scores = for each category, skills named in the role text and
//!    how many of those the resume also names; categories the role never
//!    mentions are left out
//!
//! All percentages truncate. Matching is plain substring containment, so
//! "java" matches inside "javascript".

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use super::classifier::RoleClassifier;
use super::tfidf::{cosine_similarity, StopWords, TfidfVectorizer, VectorizerError};
use crate::models::catalog::SkillRow;

#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    pub predicted_role: String,
    pub semantic_score: u32,
    pub skill_match_score: u32,
    pub overall_score: u32,
    pub category_breakdown: CategoryBreakdown,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

/// Per-category scores in catalog first-seen order. Serializes as a JSON object
/// whose keys keep that order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryBreakdown(Vec<(String, u32)>);

impl CategoryBreakdown {
    pub fn get(&self, category: &str) -> Option<u32> {
        self.0
            .iter()
            .find(|(c, _)| c == category)
            .map(|(_, score)| *score)
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(c, _)| c.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, u32)> for CategoryBreakdown {
    fn from_iter<I: IntoIterator<Item = (String, u32)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for CategoryBreakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (category, score) in &self.0 {
            map.serialize_entry(category, score)?;
        }
        map.end()
    }
}

/// Both texts are expected to be lowercased already.
pub fn analyze(
    resume_text: &str,
    role_text: &str,
    skills: &[SkillRow],
    classifier: &dyn RoleClassifier,
) -> Result<MatchReport, VectorizerError> {
    let predicted_role = classifier.classify(resume_text);
    let semantic_score = semantic_score(resume_text, role_text)?;

    let (matched_skills, missing_skills) = partition_skills(resume_text, skills);
    let skill_match_score = percentage(matched_skills.len(), skills.len());
    let overall_score = (semantic_score + skill_match_score) / 2;

    Ok(MatchReport {
        predicted_role,
        semantic_score,
        skill_match_score,
        overall_score,
        category_breakdown: category_breakdown(resume_text, role_text, skills),
        matched_skills,
        missing_skills,
    })
}

/// Cosine similarity of the two texts scaled to 0..=100. Texts that share no
/// usable terms, including empty text, score 0.
pub fn semantic_score(resume_text: &str, role_text: &str) -> Result<u32, VectorizerError> {
    let vectorizer = match TfidfVectorizer::fit(&[resume_text, role_text], StopWords::English) {
        Ok(v) => v,
        Err(VectorizerError::EmptyVocabulary) => return Ok(0),
        Err(e) => return Err(e),
    };
    let similarity = cosine_similarity(
        &vectorizer.transform(resume_text),
        &vectorizer.transform(role_text),
    );
    Ok((similarity * 100.0).clamp(0.0, 100.0) as u32)
}

/// Splits catalog skill names (lowercased) into those found in the resume and
/// those missing, both in catalog order.
pub fn partition_skills(resume_text: &str, skills: &[SkillRow]) -> (Vec<String>, Vec<String>) {
    skills
        .iter()
        .map(|s| s.name.to_lowercase())
        .partition(|name| resume_text.contains(name.as_str()))
}

pub fn category_breakdown(
    resume_text: &str,
    role_text: &str,
    skills: &[SkillRow],
) -> CategoryBreakdown {
    let mut by_category: Vec<(&str, Vec<String>)> = Vec::new();
    for skill in skills {
        let name = skill.name.to_lowercase();
        match by_category.iter_mut().find(|(c, _)| *c == skill.category) {
            Some((_, names)) => names.push(name),
            None => by_category.push((&skill.category, vec![name])),
        }
    }

    by_category
        .into_iter()
        .filter_map(|(category, names)| {
            let role_skills: Vec<&String> =
                names.iter().filter(|n| role_text.contains(n.as_str())).collect();
            if role_skills.is_empty() {
                return None;
            }
            let found = role_skills
                .iter()
                .filter(|n| resume_text.contains(n.as_str()))
                .count();
            Some((category.to_string(), percentage(found, role_skills.len())))
        })
        .collect()
}

fn percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    (part * 100 / whole) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::classifier::LogisticRoleClassifier;

    fn skill(id: i64, name: &str, category: &str) -> SkillRow {
        SkillRow {
            id,
            name: name.to_string(),
            category: category.to_string(),
        }
    }

    fn programming_catalog() -> Vec<SkillRow> {
        vec![skill(1, "python", "Programming"), skill(2, "java", "Programming")]
    }

    fn default_catalog() -> Vec<SkillRow> {
        crate::catalog::seed::DEFAULT_SKILLS
            .iter()
            .enumerate()
            .map(|(i, (name, category))| skill(i as i64 + 1, name, category))
            .collect()
    }

    #[test]
    fn test_python_resume_against_python_role() {
        let classifier = LogisticRoleClassifier::train_default().unwrap();
        let report = analyze(
            "experienced python engineer",
            "python developer",
            &programming_catalog(),
            &classifier,
        )
        .unwrap();

        assert_eq!(report.matched_skills, vec!["python"]);
        assert_eq!(report.missing_skills, vec!["java"]);
        assert_eq!(report.skill_match_score, 50);
        assert_eq!(report.category_breakdown.get("Programming"), Some(100));
    }

    #[test]
    fn test_java_matches_inside_javascript() {
        let (matched, missing) = partition_skills("javascript developer", &programming_catalog());
        assert_eq!(matched, vec!["java"]);
        assert_eq!(missing, vec!["python"]);
    }

    #[test]
    fn test_partition_is_exact() {
        let catalog = default_catalog();
        let (matched, missing) =
            partition_skills("python, docker and aws; some react too", &catalog);
        assert_eq!(matched.len() + missing.len(), catalog.len());
        for s in &catalog {
            let in_matched = matched.contains(&s.name);
            let in_missing = missing.contains(&s.name);
            assert!(in_matched != in_missing, "{} must be in exactly one set", s.name);
        }
    }

    #[test]
    fn test_skill_names_are_lowercased() {
        let catalog = vec![skill(1, "Docker", "DevOps")];
        let (matched, _) = partition_skills("docker compose", &catalog);
        assert_eq!(matched, vec!["docker"]);
    }

    #[test]
    fn test_empty_catalog_scores_half_semantic() {
        let classifier = LogisticRoleClassifier::train_default().unwrap();
        let resume = "rust backend engineer";
        let role = "rust backend engineer";
        let report = analyze(resume, role, &[], &classifier).unwrap();

        assert_eq!(report.skill_match_score, 0);
        assert_eq!(report.overall_score, report.semantic_score / 2);
        assert!(report.category_breakdown.is_empty());
        assert!(report.matched_skills.is_empty() && report.missing_skills.is_empty());
    }

    #[test]
    fn test_skill_match_score_truncates() {
        let catalog = vec![
            skill(1, "python", "Programming"),
            skill(2, "java", "Programming"),
            skill(3, "aws", "Cloud"),
        ];
        let (matched, _) = partition_skills("python", &catalog);
        assert_eq!(percentage(matched.len(), catalog.len()), 33);
    }

    #[test]
    fn test_overall_score_truncates_average() {
        let classifier = LogisticRoleClassifier::train_default().unwrap();
        let catalog = vec![
            skill(1, "python", "Programming"),
            skill(2, "java", "Programming"),
            skill(3, "aws", "Cloud"),
        ];
        let report = analyze("python", "", &catalog, &classifier).unwrap();
        // semantic is 0 against an empty role, skill match is 33
        assert_eq!(report.semantic_score, 0);
        assert_eq!(report.overall_score, 16);
    }

    #[test]
    fn test_category_without_role_skills_is_omitted() {
        let catalog = default_catalog();
        let breakdown = category_breakdown(
            "python and docker",
            "python developer who knows machine learning",
            &catalog,
        );
        assert_eq!(breakdown.get("Programming"), Some(100));
        assert_eq!(breakdown.get("AI/ML"), Some(0));
        assert_eq!(breakdown.get("Cloud"), None);
        assert_eq!(breakdown.get("DevOps"), None);
        assert_eq!(breakdown.get("Web Development"), None);
    }

    #[test]
    fn test_categories_keep_catalog_order() {
        let catalog = default_catalog();
        let breakdown = category_breakdown(
            "react, docker and java",
            "react frontend on aws with docker, java and tensorflow",
            &catalog,
        );
        let categories: Vec<&str> = breakdown.categories().collect();
        assert_eq!(
            categories,
            vec!["Programming", "AI/ML", "Cloud", "DevOps", "Web Development"]
        );
        assert_eq!(
            serde_json::to_string(&breakdown).unwrap(),
            r#"{"Programming":100,"AI/ML":0,"Cloud":0,"DevOps":100,"Web Development":100}"#
        );
    }

    #[test]
    fn test_category_partial_coverage_truncates() {
        let catalog = default_catalog();
        let breakdown = category_breakdown(
            "deep learning research",
            "machine learning, deep learning and tensorflow",
            &catalog,
        );
        assert_eq!(breakdown.get("AI/ML"), Some(33));
    }

    #[test]
    fn test_empty_resume_has_zero_semantic_score() {
        assert_eq!(semantic_score("", "python developer").unwrap(), 0);
    }

    #[test]
    fn test_both_texts_empty_has_zero_semantic_score() {
        assert_eq!(semantic_score("", "").unwrap(), 0);
    }

    #[test]
    fn test_stop_words_only_has_zero_semantic_score() {
        assert_eq!(semantic_score("the and of", "with the").unwrap(), 0);
    }

    #[test]
    fn test_identical_texts_score_near_100() {
        let text = "python developer building machine learning pipelines";
        // floating point may land just under 1.0 before truncation
        assert!(semantic_score(text, text).unwrap() >= 99);
    }

    #[test]
    fn test_semantic_score_is_bounded() {
        let score = semantic_score("python docker aws", "python react developer").unwrap();
        assert!(score > 0 && score < 100);
    }
}

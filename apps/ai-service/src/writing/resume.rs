//! Resume optimization: naive keyword overlap against a fixed technology list.
//!
//! Deterministic in both backend modes.

use std::collections::HashSet;

use crate::writing::estimate_tokens;
use crate::writing::models::{ResumeOptimizeRequest, ResumeOptimizeResponse};

const TECH_KEYWORDS: [&str; 8] = [
    "python",
    "javascript",
    "react",
    "aws",
    "docker",
    "kubernetes",
    "sql",
    "git",
];

const PENALTY_PER_MISSING: u32 = 10;
const MAX_LISTED: usize = 5;

const GENERAL_SUGGESTIONS: [&str; 4] = [
    "Start each bullet with a strong action verb",
    "Quantify achievements with concrete metrics",
    "Mirror the job description's terminology where it is accurate",
    "Keep formatting simple so ATS parsers can read every section",
];

fn term_set(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

pub fn optimize_resume(request: &ResumeOptimizeRequest) -> ResumeOptimizeResponse {
    let resume_terms = term_set(&request.resume_text);
    let job_terms = term_set(&request.job_description);

    let mut matched_keywords = Vec::new();
    let mut missing_keywords = Vec::new();

    for keyword in TECH_KEYWORDS {
        if !job_terms.contains(keyword) {
            continue;
        }
        if resume_terms.contains(keyword) {
            matched_keywords.push(keyword.to_string());
        } else {
            missing_keywords.push(keyword.to_string());
        }
    }

    let penalty = PENALTY_PER_MISSING * missing_keywords.len() as u32;
    let ats_score = 100u32.saturating_sub(penalty).min(100);

    missing_keywords.truncate(MAX_LISTED);

    let mut suggestions = Vec::with_capacity(MAX_LISTED);
    if !missing_keywords.is_empty() {
        suggestions.push(format!(
            "Add these keywords from the job description: {}",
            missing_keywords.join(", ")
        ));
    }
    suggestions.extend(GENERAL_SUGGESTIONS.iter().map(|s| s.to_string()));
    suggestions.truncate(MAX_LISTED);

    ResumeOptimizeResponse {
        optimized_resume: request.resume_text.clone(),
        ats_score,
        matched_keywords,
        missing_keywords,
        suggestions,
        tokens_used: estimate_tokens(&request.resume_text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(resume: &str, job: &str) -> ResumeOptimizeRequest {
        ResumeOptimizeRequest {
            resume_text: resume.to_string(),
            job_description: job.to_string(),
        }
    }

    #[test]
    fn test_full_coverage_scores_100() {
        let response = optimize_resume(&request(
            "Built services in Python on AWS",
            "We need python and aws experience",
        ));
        assert_eq!(response.ats_score, 100);
        assert_eq!(response.matched_keywords, vec!["python", "aws"]);
        assert!(response.missing_keywords.is_empty());
        assert_eq!(response.suggestions.len(), GENERAL_SUGGESTIONS.len());
    }

    #[test]
    fn test_each_missing_keyword_costs_ten_points() {
        let response = optimize_resume(&request(
            "Python developer",
            "python docker kubernetes sql",
        ));
        assert_eq!(response.missing_keywords, vec!["docker", "kubernetes", "sql"]);
        assert_eq!(response.ats_score, 70);
        assert!(response.suggestions[0].contains("docker, kubernetes, sql"));
    }

    #[test]
    fn test_missing_keywords_capped_at_five_but_scored_in_full() {
        let job = TECH_KEYWORDS.join(" ");
        let response = optimize_resume(&request("Marketing lead", &job));
        assert_eq!(response.missing_keywords.len(), 5);
        assert_eq!(response.ats_score, 20);
        assert_eq!(response.suggestions.len(), 5);
    }

    #[test]
    fn test_punctuation_prevents_a_match() {
        // Whitespace splitting only: "python," is not the term "python".
        let response = optimize_resume(&request("Python, SQL", "python sql"));
        assert_eq!(response.missing_keywords, vec!["python"]);
        assert_eq!(response.matched_keywords, vec!["sql"]);
    }

    #[test]
    fn test_empty_inputs_score_100() {
        let response = optimize_resume(&request("", ""));
        assert_eq!(response.ats_score, 100);
        assert_eq!(response.tokens_used, 0);
    }
}

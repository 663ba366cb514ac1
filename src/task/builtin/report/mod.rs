//! Report tasks - derive data from the aggregated report

pub mod numeric_id;
pub mod project_size;

use serde_json::Value;

/// Main language recorded for a project by the language detector
pub(crate) fn main_language(project: &Value) -> Option<&str> {
    project
        .get("LanguageDetector")?
        .get("main_language")?
        .as_str()
}

/// Languages a project is ranked by, in priority order
pub(crate) const RANKED_LANGUAGES: &[&str] = &[
    "C++",
    "C",
    "Rust",
    "Ruby",
    "Java",
    "Go",
    "PHP",
    "JavaScript",
    "Objective-C",
    "Swift",
    "C#",
    "Python",
];

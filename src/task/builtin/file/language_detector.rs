//! LanguageDetector - programming languages used by a repository
//!
//! Languages are recognised by file extension. The main language is the one
//! with the most files; ties go to the alphabetically first language.
//!
//! ```json
//! "LanguageDetector": {
//!   "main_language": "Rust",
//!   "languages": ["Rust", "Shell"]
//! }
//! ```

use crate::repository::api::Repository;
use crate::scrab_task;
use crate::task::error::TaskResult;
use crate::task::traits::FileTask;
use crate::task::types::{GlobalArgs, SubReport};
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::path::Path;

scrab_task!("LanguageDetector", "1.1.1", File, LanguageDetector::construct);

const EXTENSIONS: &[(&str, &str)] = &[
    ("c", "C"),
    ("h", "C"),
    ("cc", "C++"),
    ("cpp", "C++"),
    ("cxx", "C++"),
    ("hh", "C++"),
    ("hpp", "C++"),
    ("hxx", "C++"),
    ("cs", "C#"),
    ("go", "Go"),
    ("java", "Java"),
    ("js", "JavaScript"),
    ("mjs", "JavaScript"),
    ("m", "Objective-C"),
    ("mm", "Objective-C"),
    ("php", "PHP"),
    ("py", "Python"),
    ("rb", "Ruby"),
    ("rs", "Rust"),
    ("sh", "Shell"),
    ("swift", "Swift"),
    ("ts", "TypeScript"),
];

/// Language of a file judged by its extension
pub fn language_of(filepath: &Path) -> Option<&'static str> {
    let extension = filepath.extension()?.to_str()?.to_ascii_lowercase();
    EXTENSIONS
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, language)| *language)
}

#[derive(Debug, Default)]
pub struct LanguageDetector {
    counts: BTreeMap<&'static str, usize>,
}

impl LanguageDetector {
    pub fn construct(
        _parameter: &Value,
        _global_args: &GlobalArgs,
    ) -> TaskResult<Box<dyn FileTask>> {
        Ok(Box::new(LanguageDetector::default()))
    }

    fn main_language(&self) -> Option<&'static str> {
        // BTreeMap iterates alphabetically, so the first maximum wins ties
        let mut best: Option<(&'static str, usize)> = None;
        for (&language, &count) in &self.counts {
            if best.is_none_or(|(_, top)| count > top) {
                best = Some((language, count));
            }
        }
        best.map(|(language, _)| language)
    }
}

impl FileTask for LanguageDetector {
    fn scrab(
        &mut self,
        _repository: &Repository,
        filepath: &Path,
        _content: &str,
    ) -> TaskResult<()> {
        if let Some(language) = language_of(filepath) {
            *self.counts.entry(language).or_default() += 1;
        }
        Ok(())
    }

    fn report(&mut self) -> TaskResult<SubReport> {
        let Some(main_language) = self.main_language() else {
            return Ok(Value::Null);
        };
        let languages: Vec<&str> = self.counts.keys().copied().collect();
        Ok(json!({
            "main_language": main_language,
            "languages": languages,
        }))
    }
}

//! AuthorContributorCounter - splits the committers of a repository into
//! authors and contributors
//!
//! Non-merge commits are counted per author name, like `git shortlog -s -n
//! --no-merges`. Committers are ranked by their commit count; the leading
//! group whose counts stay close to the top committer are authors, everyone
//! else is a contributor.
//!
//! ```json
//! "AuthorContributorCounter": {
//!   "author#": 4,
//!   "contributor#": 369
//! }
//! ```

use crate::repository::api::Repository;
use crate::scrab_task;
use crate::task::error::{TaskError, TaskResult};
use crate::task::traits::GitTask;
use crate::task::types::{GlobalArgs, SubReport};
use serde_json::{json, Value};
use std::collections::HashMap;

const NAME: &str = "AuthorContributorCounter";

/// Committers below this share of the top count never raise the cutoff
const MEAN_CUT_SHARE: f64 = 0.05;

/// An author needs at least this share of the previous author's commits
const FOLLOW_SHARE: f64 = 0.4;

scrab_task!(NAME, "1.1.0", Git, AuthorContributorCounter::construct);

pub struct AuthorContributorCounter;

impl AuthorContributorCounter {
    pub fn construct(
        _parameter: &Value,
        _global_args: &GlobalArgs,
    ) -> TaskResult<Box<dyn GitTask>> {
        Ok(Box::new(AuthorContributorCounter))
    }
}

/// Number of authors and contributors in a committer ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Classification {
    pub authors: usize,
    pub contributors: usize,
}

/// Commit counts per author name, highest count first, ties by name
pub(crate) fn shortlog<I, S>(names: I) -> Vec<(usize, String)>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut counts: HashMap<String, usize> = HashMap::new();
    for name in names {
        *counts.entry(name.into()).or_default() += 1;
    }
    let mut ranked: Vec<(usize, String)> = counts
        .into_iter()
        .map(|(name, count)| (count, name))
        .collect();
    ranked.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1)));
    ranked
}

// Mean of the leading counts that reach MEAN_CUT_SHARE of the top count.
// Keeps slowly decreasing rankings from counting everyone as an author.
fn cutoff(ranked: &[(usize, String)]) -> Option<f64> {
    let top = ranked.first()?.0 as f64;
    let mean_cut = top * MEAN_CUT_SHARE;

    let leading: Vec<f64> = ranked
        .iter()
        .map(|(count, _)| *count as f64)
        .take_while(|count| *count >= mean_cut)
        .collect();
    Some(leading.iter().sum::<f64>() / leading.len() as f64)
}

/// Split a ranking into authors and contributors
pub(crate) fn classify(ranked: &[(usize, String)]) -> Option<Classification> {
    let cutoff = cutoff(ranked)?;
    let mut previous = ranked.first()?.0 as f64;
    let mut classification = Classification {
        authors: 0,
        contributors: 0,
    };

    for (count, _) in ranked {
        let count = *count as f64;
        if count >= cutoff && count >= previous * FOLLOW_SHARE {
            previous = count;
            classification.authors += 1;
        } else {
            classification.contributors += 1;
        }
    }
    Some(classification)
}

impl GitTask for AuthorContributorCounter {
    fn scrab(&mut self, repository: &Repository) -> TaskResult<SubReport> {
        let repo = super::open_repository(NAME, repository)?;
        let failed = |what: &str, e: &dyn std::fmt::Display| {
            TaskError::execution(NAME, format!("Failed to {}: {}", what, e))
        };

        let head = repo
            .head_commit()
            .map_err(|e| failed("resolve HEAD commit", &e))?;
        let walk = repo
            .rev_walk([head.id])
            .all()
            .map_err(|e| failed("walk the commit history", &e))?;

        let mut names = Vec::new();
        for info in walk {
            let info = info.map_err(|e| failed("walk the commit history", &e))?;
            let commit = info.object().map_err(|e| failed("load commit", &e))?;
            if commit.parent_ids().count() > 1 {
                continue;
            }
            let author = commit
                .author()
                .map_err(|e| failed("read commit author", &e))?;
            names.push(author.name.to_string().trim().to_string());
        }

        let Some(classification) = classify(&shortlog(names)) else {
            return Ok(Value::Null);
        };
        log::debug!(
            "{}: {} authors and {} contributors in '{}'",
            NAME,
            classification.authors,
            classification.contributors,
            repository.id()
        );
        Ok(json!({
            "author#": classification.authors,
            "contributor#": classification.contributors,
        }))
    }
}

//! ProjectSizeCalculator - size class of each project by line count
//!
//! Line counts come from `ProjectMetrics`. For the main language of a project
//! and for all projects together, a project below the 25th percentile is
//! `small`, one above the 75th percentile is `big`, anything else `normal`.
//!
//! ```json
//! "ProjectSizeCalculator": { "C": "big", "total": "normal" }
//! ```

use super::{main_language, RANKED_LANGUAGES};
use crate::report::api::Report;
use crate::scrab_task;
use crate::task::error::TaskResult;
use crate::task::traits::ReportTask;
use crate::task::types::GlobalArgs;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

const NAME: &str = "ProjectSizeCalculator";
const TOTAL: &str = "total";

scrab_task!(NAME, "1.0.0", Report, ProjectSizeCalculator::construct);

pub struct ProjectSizeCalculator;

impl ProjectSizeCalculator {
    pub fn construct(
        _parameter: &Value,
        _global_args: &GlobalArgs,
    ) -> TaskResult<Box<dyn ReportTask>> {
        Ok(Box::new(ProjectSizeCalculator))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Limit {
    lower: f64,
    upper: f64,
}

impl Limit {
    fn classify(&self, lines: f64) -> &'static str {
        if lines < self.lower {
            "small"
        } else if lines > self.upper {
            "big"
        } else {
            "normal"
        }
    }
}

/// Percentile with linear interpolation between closest ranks
pub(crate) fn percentile(sorted: &[f64], percent: f64) -> Option<f64> {
    let last = sorted.len().checked_sub(1)?;
    let rank = percent / 100.0 * last as f64;
    let below = rank.floor() as usize;
    let above = rank.ceil() as usize;
    let fraction = rank - below as f64;
    Some(sorted[below] + (sorted[above] - sorted[below]) * fraction)
}

fn project_lines(project: &Value) -> Option<f64> {
    project.get("ProjectMetrics")?.get("lines")?.as_f64()
}

/// Groups a project is measured in
fn groups(project: &Value) -> Vec<&str> {
    let mut groups = Vec::with_capacity(2);
    if let Some(language) = main_language(project) {
        if RANKED_LANGUAGES.contains(&language) {
            groups.push(language);
        }
    }
    groups.push(TOTAL);
    groups
}

fn limits(report: &Report) -> BTreeMap<String, Limit> {
    let mut samples: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for project in report.projects.values() {
        let Some(lines) = project_lines(project) else {
            continue;
        };
        for group in groups(project) {
            samples.entry(group.to_string()).or_default().push(lines);
        }
    }

    samples
        .into_iter()
        .filter_map(|(group, mut lines)| {
            lines.sort_by(f64::total_cmp);
            let lower = percentile(&lines, 25.0)?;
            let upper = percentile(&lines, 75.0)?;
            Some((group, Limit { lower, upper }))
        })
        .collect()
}

impl ReportTask for ProjectSizeCalculator {
    fn scrab(&mut self, mut report: Report) -> TaskResult<Report> {
        let limits = limits(&report);

        for project in report.projects.values_mut() {
            let Some(lines) = project_lines(project) else {
                continue;
            };
            let mut sizes = Map::new();
            for group in groups(project) {
                if let Some(limit) = limits.get(group) {
                    sizes.insert(group.to_string(), Value::from(limit.classify(lines)));
                }
            }
            if let Value::Object(project) = project {
                project.insert(NAME.to_string(), Value::Object(sizes));
            }
        }
        Ok(report)
    }
}

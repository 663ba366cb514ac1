//! NumericID - sequential project ids grouped by main language
//!
//! Projects are numbered from 1 in the order of `RANKED_LANGUAGES`; projects
//! with an unranked or unknown main language are numbered last. Within a
//! language, projects are numbered in report order.

use super::{main_language, RANKED_LANGUAGES};
use crate::report::api::Report;
use crate::scrab_task;
use crate::task::error::TaskResult;
use crate::task::traits::ReportTask;
use crate::task::types::GlobalArgs;
use serde_json::Value;

pub const ID_KEY: &str = "NumericID";

scrab_task!(ID_KEY, "1.0.0", Report, NumericId::construct);

pub struct NumericId;

impl NumericId {
    pub fn construct(
        _parameter: &Value,
        _global_args: &GlobalArgs,
    ) -> TaskResult<Box<dyn ReportTask>> {
        Ok(Box::new(NumericId))
    }
}

/// Project ids in numbering order
fn numbering_order(report: &Report) -> Vec<String> {
    let mut order: Vec<String> = Vec::with_capacity(report.projects.len());
    for language in RANKED_LANGUAGES {
        order.extend(
            report
                .projects
                .iter()
                .filter(|(_, project)| main_language(project) == Some(*language))
                .map(|(id, _)| id.clone()),
        );
    }
    let ranked: Vec<String> = order.clone();
    order.extend(
        report
            .projects
            .keys()
            .filter(|id| !ranked.contains(id))
            .cloned(),
    );
    order
}

impl ReportTask for NumericId {
    fn scrab(&mut self, mut report: Report) -> TaskResult<Report> {
        let order = numbering_order(&report);
        for (index, id) in order.iter().enumerate() {
            if let Some(Value::Object(project)) = report.projects.get_mut(id) {
                project.insert(ID_KEY.to_string(), Value::from(index + 1));
            }
        }
        log::debug!("{}: numbered {} projects", ID_KEY, order.len());
        Ok(report)
    }
}

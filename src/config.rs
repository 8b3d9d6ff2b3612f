use crate::consts::DEFAULT_REPORT_FIELDS;
use crate::error::{ScopeResult, ShotScopeError};
use crate::shot::MetricField;
use clap::Args;
use std::str::FromStr;
use strum::IntoEnumIterator;

#[derive(Args, Debug, Clone)]
pub struct ReportConfig {
    /// Comma-separated metric columns to summarize per group.
    #[arg(long, default_value = DEFAULT_REPORT_FIELDS)]
    pub fields: String,

    /// Only report groups whose player name contains this (case-insensitive).
    #[arg(short, long)]
    pub player: Option<String>,

    /// Only report groups whose club label contains this (case-insensitive).
    #[arg(long)]
    pub club: Option<String>,
}

impl ReportConfig {
    pub fn metric_fields(&self) -> ScopeResult<Vec<MetricField>> {
        parse_field_list(&self.fields)
    }
}

pub fn parse_field_list(list: &str) -> ScopeResult<Vec<MetricField>> {
    list.split(',')
        .map(|part| {
            let name = part.trim();
            MetricField::from_str(name).map_err(|_| {
                let known: Vec<String> = MetricField::iter().map(|f| f.to_string()).collect();
                ShotScopeError::Config(format!(
                    "unknown metric '{}' in --fields (expected one of: {})",
                    name,
                    known.join(", ")
                ))
            })
        })
        .collect()
}

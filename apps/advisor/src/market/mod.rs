//! Market reference data: in-demand skills, growing fields and salary bands.
//!
//! Read-only for the lifetime of the process. Loaded once at startup, either from the built-in
//! table or from a JSON file with the same field names, then shared behind an `Arc`.

pub mod handlers;

use std::path::Path;

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::info;

const HIGH_DEMAND_SKILLS: &[&str] = &[
    "Python",
    "Machine Learning",
    "Cloud Computing",
    "Data Analysis",
    "AI Development",
    "Cybersecurity",
    "DevOps",
    "React",
    "SQL",
];

const GROWING_FIELDS: &[&str] = &[
    "Artificial Intelligence",
    "Data Science",
    "Cloud Engineering",
    "Cybersecurity",
    "Digital Marketing",
    "UX/UI Design",
];

const SALARY_TRENDS: &[(&str, &str)] = &[
    ("Data Scientist", "$120,000 - $180,000"),
    ("Software Engineer", "$110,000 - $170,000"),
    ("AI Engineer", "$130,000 - $190,000"),
    ("Cloud Architect", "$130,000 - $200,000"),
    ("DevOps Engineer", "$120,000 - $180,000"),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketData {
    pub high_demand_skills: Vec<String>,
    pub growing_fields: Vec<String>,
    /// Role name → salary-range text, e.g. `"$120,000 - $180,000"`. Keeps table/file order.
    pub salary_trends: IndexMap<String, String>,
}

impl MarketData {
    pub fn builtin() -> Self {
        Self {
            high_demand_skills: HIGH_DEMAND_SKILLS.iter().map(|s| s.to_string()).collect(),
            growing_fields: GROWING_FIELDS.iter().map(|s| s.to_string()).collect(),
            salary_trends: SALARY_TRENDS
                .iter()
                .map(|(role, range)| (role.to_string(), range.to_string()))
                .collect(),
        }
    }

    /// Reads a JSON file with `high_demand_skills`, `growing_fields` and `salary_trends`.
    /// All three sections are required.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read market data file '{}'", path.display()))?;
        let data: MarketData = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid market data in '{}'", path.display()))?;
        info!(
            "Loaded market data from {}: {} skills, {} fields, {} salary bands",
            path.display(),
            data.high_demand_skills.len(),
            data.growing_fields.len(),
            data.salary_trends.len()
        );
        Ok(data)
    }

    /// Built-in table unless a file path is configured.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::builtin()),
        }
    }
}

/// Lower bound of a salary band in thousands, for bar-chart style displays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalaryPoint {
    pub role: String,
    pub average_salary_k: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MarketInsights {
    pub high_demand_skills: Vec<String>,
    pub growing_fields: Vec<String>,
    pub salary_trends: IndexMap<String, String>,
    pub salary_points: Vec<SalaryPoint>,
}

/// Digits of the text before the first `-`, read as dollars and scaled to thousands.
/// `"$120,000 - $180,000"` → `120.0`. `None` when that part carries no digits.
pub fn salary_lower_bound_k(range: &str) -> Option<f64> {
    let lower = range.split('-').next().unwrap_or_default();
    let digits: String = lower.chars().filter(|c| c.is_ascii_digit()).collect();
    let dollars: u64 = digits.parse().ok()?;
    Some(dollars as f64 / 1000.0)
}

pub fn build_insights(data: &MarketData) -> MarketInsights {
    let salary_points = data
        .salary_trends
        .iter()
        .filter_map(|(role, range)| {
            salary_lower_bound_k(range).map(|k| SalaryPoint {
                role: role.clone(),
                average_salary_k: k,
            })
        })
        .collect();

    MarketInsights {
        high_demand_skills: data.high_demand_skills.clone(),
        growing_fields: data.growing_fields.clone(),
        salary_trends: data.salary_trends.clone(),
        salary_points,
    }
}

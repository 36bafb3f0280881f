use serde::{Deserialize, Deserializer, Serialize};

/// Decodes a field, falling back to its zero value when the model sent the wrong JSON type
/// (e.g. a comma-separated string where a list was asked for).
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Decodes a list of strings element by element. Non-string elements are dropped; a value that
/// is not a list at all becomes an empty list.
fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let strings = match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                serde_json::Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    };
    Ok(strings)
}

/// Years of experience as reported by the model. Kept verbatim: the model is free to answer
/// `5`, `5.5` or `"5+ years"`, and nothing downstream reads the value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExperienceYears {
    Number(serde_json::Number),
    Text(String),
}

impl Default for ExperienceYears {
    fn default() -> Self {
        ExperienceYears::Text(String::new())
    }
}

/// Structured facts the model derives from a resume.
///
/// Every field carries a serde default, so a response missing any of them still decodes into a
/// fully-formed record. `education` and `experience_years` are collected but do not feed the
/// score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisResult {
    #[serde(deserialize_with = "lenient_strings")]
    pub skills: Vec<String>,
    #[serde(deserialize_with = "lenient")]
    pub experience: String,
    #[serde(deserialize_with = "lenient")]
    pub education: String,
    #[serde(deserialize_with = "lenient_strings")]
    pub strengths: Vec<String>,
    #[serde(deserialize_with = "lenient_strings")]
    pub improvement_areas: Vec<String>,
    #[serde(deserialize_with = "lenient")]
    pub current_role: String,
    #[serde(deserialize_with = "lenient")]
    pub experience_years: ExperienceYears,
}

/// One suggested next career move.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recommendation {
    #[serde(deserialize_with = "lenient")]
    pub next_role: String,
    #[serde(deserialize_with = "lenient")]
    pub reason: String,
    /// 0-100, as reported by the model. Not range-checked.
    #[serde(deserialize_with = "lenient")]
    pub skills_match: i64,
    #[serde(deserialize_with = "lenient_strings")]
    pub skills_to_develop: Vec<String>,
    #[serde(deserialize_with = "lenient_strings")]
    pub learning_resources: Vec<String>,
    #[serde(deserialize_with = "lenient")]
    pub salary_range: String,
    #[serde(deserialize_with = "lenient")]
    pub job_growth: String,
}

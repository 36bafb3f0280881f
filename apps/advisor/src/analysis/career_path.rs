use serde::Serialize;

use crate::analysis::models::{AnalysisResult, Recommendation};

const CURRENT_FALLBACK: &str = "Current Position";
const NEXT_FALLBACK: &str = "Mid-level Position";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CareerStage {
    pub stage: &'static str,
    pub role: String,
    pub focus: &'static str,
}

/// Four-stage projection: where the candidate is, the first recommended move, then generic
/// senior and leadership stages.
pub fn project_career_path(
    analysis: &AnalysisResult,
    recommendations: &[Recommendation],
) -> Vec<CareerStage> {
    let current = if analysis.current_role.trim().is_empty() {
        CURRENT_FALLBACK.to_string()
    } else {
        analysis.current_role.clone()
    };
    let next = recommendations
        .first()
        .map(|r| r.next_role.clone())
        .unwrap_or_else(|| NEXT_FALLBACK.to_string());

    vec![
        CareerStage {
            stage: "Current",
            role: current,
            focus: "Master Current Role",
        },
        CareerStage {
            stage: "Next 1-2 Years",
            role: next,
            focus: "Develop New Skills",
        },
        CareerStage {
            stage: "Next 3-5 Years",
            role: "Senior Position".to_string(),
            focus: "Gain Specialization",
        },
        CareerStage {
            stage: "Future",
            role: "Leadership Position".to_string(),
            focus: "Strategic Leadership",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_nothing_known() {
        let path = project_career_path(&AnalysisResult::default(), &[]);
        let roles: Vec<_> = path.iter().map(|s| s.role.as_str()).collect();
        assert_eq!(
            roles,
            vec![
                "Current Position",
                "Mid-level Position",
                "Senior Position",
                "Leadership Position"
            ]
        );
    }

    #[test]
    fn test_uses_current_role_and_first_recommendation() {
        let analysis = AnalysisResult {
            current_role: "Data Analyst".to_string(),
            ..Default::default()
        };
        let recs = vec![
            Recommendation {
                next_role: "Data Scientist".to_string(),
                ..Default::default()
            },
            Recommendation {
                next_role: "BI Lead".to_string(),
                ..Default::default()
            },
        ];
        let path = project_career_path(&analysis, &recs);
        assert_eq!(path[0].role, "Data Analyst");
        assert_eq!(path[1].role, "Data Scientist");
        assert_eq!(path[1].focus, "Develop New Skills");
        assert_eq!(path[3].stage, "Future");
    }
}

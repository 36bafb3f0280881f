use serde::{Deserialize, Serialize};

/// Candidate skills split against the high-demand reference list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillGap {
    /// Candidate skills found in the reference list, in candidate order.
    pub matched: Vec<String>,
    /// Reference skills the candidate lacks, in reference order. Never truncated.
    pub missing: Vec<String>,
}

/// Exact, case-sensitive comparison: "python" does not match "Python".
pub fn match_skills(candidate: &[String], reference: &[String]) -> SkillGap {
    let matched = candidate
        .iter()
        .filter(|skill| reference.contains(skill))
        .cloned()
        .collect();

    let missing = reference
        .iter()
        .filter(|skill| !candidate.contains(skill))
        .cloned()
        .collect();

    SkillGap { matched, missing }
}

use crate::analysis::models::AnalysisResult;

const BASE_SCORE: u32 = 70;
const MAX_SCORE: u32 = 100;

/// (strictly-greater-than threshold, bonus), checked in order; the first hit wins.
const SKILL_TIERS: &[(usize, u32)] = &[(10, 10), (5, 5)];
const EXPERIENCE_TIERS: &[(usize, u32)] = &[(100, 10), (50, 5)];

/// Heuristic resume score in `[70, 100]`.
///
/// Rewards breadth of listed skills and length of the experience summary. Education and
/// experience years are deliberately not inputs.
pub fn compute_resume_score(analysis: &AnalysisResult) -> u8 {
    let skill_bonus = tier_bonus(analysis.skills.len(), SKILL_TIERS);
    let experience_bonus = tier_bonus(analysis.experience.chars().count(), EXPERIENCE_TIERS);

    (BASE_SCORE + skill_bonus + experience_bonus).min(MAX_SCORE) as u8
}

fn tier_bonus(count: usize, tiers: &[(usize, u32)]) -> u32 {
    tiers
        .iter()
        .find(|(threshold, _)| count > *threshold)
        .map(|(_, bonus)| *bonus)
        .unwrap_or(0)
}

use std::collections::HashSet;

use crate::models::MenuOption;
use crate::planner::constants::{PORK, PORK_PENALTY, PROTEIN_BONUS, VEG_BONUS};

/// Desirability of one dish against what is on hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionScore {
    pub score: i32,

    /// Ingredients the dish calls for that are not on hand.
    pub missing: usize,
}

/// Score a menu option against the available ingredients.
///
/// Base points for having any protein and any vegetable, one point per
/// required ingredient on hand (duplicates counted as listed), minus the
/// pork penalty when the lead protein is pork.
pub fn score_option(option: &MenuOption, available: &HashSet<String>) -> OptionScore {
    let need = option.ingredients().count();
    let have = option
        .ingredients()
        .filter(|&ing| available.contains(ing))
        .count();
    let missing = need - have;

    let has_protein = option.protein.iter().any(|i| available.contains(i));
    let has_veg = option.veg.iter().any(|i| available.contains(i));

    let mut score = 0;
    if has_protein {
        score += PROTEIN_BONUS;
    }
    if has_veg {
        score += VEG_BONUS;
    }
    score += have as i32;
    if option.primary_protein() == Some(PORK) {
        score -= PORK_PENALTY;
    }

    OptionScore { score, missing }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(title: &str, protein: &[&str], veg: &[&str], extras: &[&str]) -> MenuOption {
        MenuOption {
            title: title.to_string(),
            protein: protein.iter().map(|s| s.to_string()).collect(),
            veg: veg.iter().map(|s| s.to_string()).collect(),
            extras: extras.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn set(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_pantry_misses_everything() {
        let opt = option("Pollo grillado", &["pollo"], &["lechuga", "tomate"], &["sal"]);
        let result = score_option(&opt, &HashSet::new());

        assert_eq!(result.missing, 4);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_full_pantry_misses_nothing() {
        let opt = option("Pollo grillado", &["pollo"], &["lechuga", "tomate"], &["sal"]);
        let pantry = set(&["pollo", "lechuga", "tomate", "sal"]);
        let result = score_option(&opt, &pantry);

        assert_eq!(result.missing, 0);
        // 10 protein + 10 veg + 4 on hand
        assert_eq!(result.score, 24);
    }

    #[test]
    fn test_pork_twin_scores_three_lower() {
        let chicken = option("Plato", &["pollo"], &["zanahoria"], &[]);
        let pork = option("Plato", &["cerdo"], &["zanahoria"], &[]);
        let pantry = set(&["zanahoria"]);

        let chicken_score = score_option(&chicken, &pantry);
        let pork_score = score_option(&pork, &pantry);

        assert_eq!(chicken_score.score - pork_score.score, PORK_PENALTY);
        assert_eq!(chicken_score.missing, pork_score.missing);
    }

    #[test]
    fn test_pork_penalty_only_on_lead_protein() {
        let pork_second = option("Mixto", &["pollo", "cerdo"], &[], &[]);
        let result = score_option(&pork_second, &set(&["pollo"]));

        // 10 protein + 1 on hand, no penalty
        assert_eq!(result.score, 11);
    }

    #[test]
    fn test_duplicates_counted_as_listed() {
        let opt = option("Doble tomate", &[], &["tomate", "tomate"], &[]);
        let result = score_option(&opt, &set(&["tomate"]));

        // 10 veg + 2 on hand, both listed entries count
        assert_eq!(result.score, 12);
        assert_eq!(result.missing, 0);
    }

    #[test]
    fn test_no_protein_no_veg_scores_via_have() {
        let opt = option("Arroz", &[], &[], &["arroz", "sal"]);
        let result = score_option(&opt, &set(&["sal"]));

        assert_eq!(result.score, 1);
        assert_eq!(result.missing, 1);
    }

    #[test]
    fn test_pork_score_can_go_negative() {
        let opt = option("Cerdo solo", &["cerdo"], &[], &[]);
        let result = score_option(&opt, &HashSet::new());

        assert_eq!(result.score, -PORK_PENALTY);
        assert_eq!(result.missing, 1);
    }
}

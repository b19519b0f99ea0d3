use std::collections::HashSet;

use crate::models::{MenuOption, PlanResult};
use crate::planner::constants::MAX_ALTERNATIVES;
use crate::planner::scoring::{score_option, OptionScore};

/// Scored candidate, carrying its dish and repeat-avoidance identity.
#[derive(Debug)]
struct Candidate<'a> {
    option: &'a MenuOption,
    protein: Option<&'a str>,
    score: OptionScore,
}

/// Pick the best dish for today plus up to two protein-distinct alternatives.
///
/// The best dish never repeats yesterday's protein unless every option does,
/// so a day whose dishes all repeat yesterday still gets a recommendation.
/// Alternatives keep primary proteins pairwise distinct, avoiding yesterday's
/// protein as a preference rather than a rule.
pub fn select_plans(
    options: &[MenuOption],
    available: &HashSet<String>,
    last_protein: Option<&str>,
) -> PlanResult {
    if options.is_empty() {
        return PlanResult::default();
    }

    let scored: Vec<Candidate> = options
        .iter()
        .map(|option| Candidate {
            option,
            protein: option.primary_protein(),
            score: score_option(option, available),
        })
        .collect();

    // Stable: equal score and missing keep the original menu order.
    let mut ranked: Vec<&Candidate> = scored.iter().collect();
    ranked.sort_by(|a, b| {
        b.score
            .score
            .cmp(&a.score.score)
            .then(a.score.missing.cmp(&b.score.missing))
    });

    let best = match last_protein {
        Some(last) => ranked
            .iter()
            .find(|c| c.protein != Some(last))
            .copied()
            .unwrap_or(ranked[0]),
        None => ranked[0],
    };

    // First pass also avoids yesterday's protein; the second relaxes that
    // preference while keeping proteins pairwise distinct. Two dishes with
    // no protein at all count as sharing one.
    let mut picked: Vec<&Candidate> = Vec::new();
    for relax in [false, true] {
        for &cand in &ranked {
            if picked.len() == MAX_ALTERNATIVES {
                break;
            }
            if std::ptr::eq(cand, best) {
                continue;
            }
            if cand.protein == best.protein {
                continue;
            }
            if picked.iter().any(|p| p.protein == cand.protein) {
                continue;
            }
            if !relax && last_protein.is_some() && cand.protein == last_protein {
                continue;
            }
            picked.push(cand);
        }
    }

    PlanResult {
        best: Some(best.option.clone()),
        alternatives: picked.into_iter().map(|c| c.option.clone()).collect(),
    }
}

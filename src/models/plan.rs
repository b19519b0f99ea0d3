use crate::models::MenuOption;

/// Outcome of a selection run: the best dish plus up to two alternatives.
///
/// Primary proteins among the returned plans are pairwise distinct; the
/// alternatives list is never padded with protein duplicates.
#[derive(Debug, Clone, Default)]
pub struct PlanResult {
    pub best: Option<MenuOption>,
    pub alternatives: Vec<MenuOption>,
}

impl PlanResult {
    /// True when no dish could be recommended (empty day).
    pub fn is_empty(&self) -> bool {
        self.best.is_none()
    }

    /// Primary protein of the best plan, the value carried into tomorrow's
    /// state record. Alternatives never feed the record.
    pub fn chosen_protein(&self) -> Option<&str> {
        self.best.as_ref().and_then(MenuOption::primary_protein)
    }
}

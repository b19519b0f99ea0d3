use serde::{Deserialize, Serialize};

/// What the previous run chose, carried into the next one.
///
/// A single record with no history: the newest choice overwrites it. Field
/// names match the on-disk JSON the page build has always used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationState {
    #[serde(rename = "lastDate", default)]
    pub last_date: Option<String>,

    #[serde(rename = "lastProtein", default)]
    pub last_protein: Option<String>,
}

impl RecommendationState {
    /// Record today's choice so the next run can avoid its protein.
    ///
    /// A best plan with no protein keeps the previous protein on record but
    /// still stamps the date.
    pub fn record_choice(&mut self, protein: Option<&str>, iso_date: &str) {
        if let Some(p) = protein {
            self.last_protein = Some(p.to_string());
        }
        self.last_date = Some(iso_date.to_string());
    }
}

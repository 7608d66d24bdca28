use serde::{Deserialize, Serialize};

use crate::llm_client::LlmError;

pub const EMPTY_SUMMARY: &str = "Ainda não há avaliações suficientes para análise.";

/// The four Ikigai pillars, each a list of short phrases.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IkigaiInsights {
    pub passion: Vec<String>,
    pub mission: Vec<String>,
    pub vocation: Vec<String>,
    pub profession: Vec<String>,
}

/// Aggregate view over every review in the system, as produced by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    pub total_reviews: u32,
    pub ikigai_insights: IkigaiInsights,
    pub common_characteristics: Vec<String>,
    pub interest_areas: Vec<String>,
    pub suggested_careers: Vec<String>,
    pub summary: String,
}

impl AnalyticsReport {
    /// Returned when there is nothing to analyze. No model call is made.
    pub fn empty() -> Self {
        Self {
            total_reviews: 0,
            ikigai_insights: IkigaiInsights::default(),
            common_characteristics: Vec::new(),
            interest_areas: Vec::new(),
            suggested_careers: Vec::new(),
            summary: EMPTY_SUMMARY.to_string(),
        }
    }

    /// Checks what serde cannot: a non-blank summary. List items are trimmed
    /// and blank ones dropped. `total_reviews` is replaced with the real count.
    pub fn validate(mut self, review_count: usize) -> Result<Self, LlmError> {
        self.summary = self.summary.trim().to_string();
        if self.summary.is_empty() {
            return Err(LlmError::SchemaMismatch("summary is empty".to_string()));
        }

        for list in [
            &mut self.ikigai_insights.passion,
            &mut self.ikigai_insights.mission,
            &mut self.ikigai_insights.vocation,
            &mut self.ikigai_insights.profession,
            &mut self.common_characteristics,
            &mut self.interest_areas,
            &mut self.suggested_careers,
        ] {
            clean_list(list);
        }

        self.total_reviews = u32::try_from(review_count).unwrap_or(u32::MAX);
        Ok(self)
    }
}

fn clean_list(items: &mut Vec<String>) {
    items.retain(|s| !s.trim().is_empty());
    for item in items.iter_mut() {
        *item = item.trim().to_string();
    }
}

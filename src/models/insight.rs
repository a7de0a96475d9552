use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightCategory {
    Pattern,
    Achievement,
    Suggestion,
    Trend,
}

/// A generated observation plus recommendation. Produced transiently by the
/// insight engine; list order is the firing order of the rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DreamInsight {
    pub title: String,
    pub description: String,
    pub category: InsightCategory,
    pub recommendation: String,
}

impl DreamInsight {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: InsightCategory,
        recommendation: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            category,
            recommendation: recommendation.into(),
        }
    }
}

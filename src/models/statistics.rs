use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Emotion;

/// Sentinel used for string aggregates when there is no history yet.
pub const NO_DATA: &str = "No data";

/// Aggregate view over a user's full dream history. Every field is derived
/// from the record collection handed to the analytics engine; nothing here is
/// persisted or updated incrementally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DreamStatistics {
    pub total_dreams: i32,
    pub dreams_this_month: i32,
    pub dreams_this_week: i32,
    pub average_sleep_quality: f64,
    pub average_lucidity: f64,
    pub most_common_emotion: String,
    /// Top 5 symbols by count, ties broken by label.
    pub top_symbols: Vec<String>,
    pub dreams_per_day: BTreeMap<NaiveDate, i32>,
    /// One vote per dream, keyed by that dream's dominant emotion.
    pub emotion_frequency: BTreeMap<Emotion, i32>,
    /// One increment per distinct symbol per dream.
    pub symbol_frequency: BTreeMap<String, i32>,
    pub longest_streak: i32,
    pub current_streak: i32,
}

impl Default for DreamStatistics {
    fn default() -> Self {
        Self {
            total_dreams: 0,
            dreams_this_month: 0,
            dreams_this_week: 0,
            average_sleep_quality: 0.0,
            average_lucidity: 0.0,
            most_common_emotion: NO_DATA.to_string(),
            top_symbols: Vec::new(),
            dreams_per_day: BTreeMap::new(),
            emotion_frequency: BTreeMap::new(),
            symbol_frequency: BTreeMap::new(),
            longest_streak: 0,
            current_streak: 0,
        }
    }
}

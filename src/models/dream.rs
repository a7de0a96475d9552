use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::InvalidInputError;

/// A single journaled dream. Created by the caller (or loaded from storage)
/// before analysis; the engine never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DreamRecord {
    pub id: i64,
    pub user_id: i64,
    pub dream_text: String,
    pub dream_date: NaiveDate,
    /// 1-10
    pub sleep_quality: i32,
    /// 0-5
    pub lucidity_level: i32,
}

impl DreamRecord {
    pub fn validate(&self) -> Result<(), InvalidInputError> {
        if !(1..=10).contains(&self.sleep_quality) {
            return Err(InvalidInputError::new(format!(
                "dream {}: sleep_quality {} outside 1-10",
                self.id, self.sleep_quality
            )));
        }
        if !(0..=5).contains(&self.lucidity_level) {
            return Err(InvalidInputError::new(format!(
                "dream {}: lucidity_level {} outside 0-5",
                self.id, self.lucidity_level
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDream {
    pub user_id: i64,
    pub dream_text: String,
    pub dream_date: NaiveDate,
    pub sleep_quality: i32,
    pub lucidity_level: i32,
}

impl NewDream {
    pub fn validate(&self) -> Result<(), InvalidInputError> {
        if !(1..=10).contains(&self.sleep_quality) {
            return Err(InvalidInputError::new(format!(
                "sleep_quality {} outside 1-10",
                self.sleep_quality
            )));
        }
        if !(0..=5).contains(&self.lucidity_level) {
            return Err(InvalidInputError::new(format!(
                "lucidity_level {} outside 0-5",
                self.lucidity_level
            )));
        }
        Ok(())
    }
}

/// Range/quality filters supported by the record store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DreamFilter {
    #[default]
    All,
    LastSevenDays,
    LastThirtyDays,
    /// lucidity_level >= 3
    HighLucidity,
    /// sleep_quality >= 8
    VividDreams,
}

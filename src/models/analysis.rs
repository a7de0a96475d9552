use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InvalidInputError;

/// The closed set of emotions the scorer knows about.
///
/// Declaration order doubles as the tie-break order for every "max by score"
/// reduction, so an all-zero score map resolves to `Joy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Joy,
    Fear,
    Anxiety,
    Sadness,
    Peace,
    Excitement,
    Confusion,
    Anger,
    Surprise,
    Love,
}

impl Emotion {
    pub const ALL: [Emotion; 10] = [
        Emotion::Joy,
        Emotion::Fear,
        Emotion::Anxiety,
        Emotion::Sadness,
        Emotion::Peace,
        Emotion::Excitement,
        Emotion::Confusion,
        Emotion::Anger,
        Emotion::Surprise,
        Emotion::Love,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Joy => "joy",
            Emotion::Fear => "fear",
            Emotion::Anxiety => "anxiety",
            Emotion::Sadness => "sadness",
            Emotion::Peace => "peace",
            Emotion::Excitement => "excitement",
            Emotion::Confusion => "confusion",
            Emotion::Anger => "anger",
            Emotion::Surprise => "surprise",
            Emotion::Love => "love",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Emotion {
    type Err = InvalidInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Emotion::ALL
            .iter()
            .copied()
            .find(|e| e.as_str() == s)
            .ok_or_else(|| InvalidInputError::new(format!("unknown emotion label: {s}")))
    }
}

/// Normalized intensity per emotion, one entry per known label, values in
/// [0.0, 1.0]. A `BTreeMap` keeps iteration and serialization deterministic.
pub type EmotionScores = BTreeMap<Emotion, f64>;

/// Pick the highest-scoring emotion; strict comparison keeps the first
/// enumerated label on ties.
pub fn dominant_emotion(scores: &EmotionScores) -> Emotion {
    let mut best = Emotion::ALL[0];
    let mut best_score = f64::MIN;
    for emotion in Emotion::ALL {
        let score = scores.get(&emotion).copied().unwrap_or(0.0);
        if score > best_score {
            best = emotion;
            best_score = score;
        }
    }
    best
}

/// Which extraction pass produced a symbol match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolTier {
    Direct,
    Contextual,
    Metaphorical,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymbolMatch {
    pub name: String,
    pub meaning: String,
    pub confidence: f64,
    pub tier: SymbolTier,
}

/// Full analysis derived from one dream record. Immutable once built; the
/// storage layer stamps its own timestamp when persisting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub dream_id: i64,
    pub emotion_breakdown: EmotionScores,
    pub dominant_emotion: Emotion,
    /// Score of the dominant emotion.
    pub emotion_score: f64,
    /// At most 8 entries, confidence-descending, unique by name.
    pub symbols: Vec<SymbolMatch>,
    pub interpretation: String,
    /// (max emotion score + min(1.0, symbol count * 0.2)) / 2
    pub confidence_score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dominant_emotion_prefers_enum_order_on_ties() {
        let scores: EmotionScores = Emotion::ALL.iter().map(|e| (*e, 0.5)).collect();
        assert_eq!(dominant_emotion(&scores), Emotion::Joy);
    }

    #[test]
    fn dominant_emotion_of_empty_map_is_first_label() {
        assert_eq!(dominant_emotion(&EmotionScores::new()), Emotion::Joy);
    }

    #[test]
    fn dominant_emotion_tracks_max() {
        let mut scores: EmotionScores = Emotion::ALL.iter().map(|e| (*e, 0.0)).collect();
        scores.insert(Emotion::Anger, 0.9);
        scores.insert(Emotion::Fear, 0.4);
        assert_eq!(dominant_emotion(&scores), Emotion::Anger);
    }
}

//! DreamFlow: a deterministic dream-journal analysis engine.
//!
//! Raw narratives go through the lexicon-driven [`NlpEngine`] (emotion scores
//! and ranked symbols), per-dream results come from
//! [`services::analysis_engine::analyze_dream`], and a user's whole history is
//! reduced to [`DreamStatistics`] and rule-driven [`DreamInsight`]s. The
//! `database` module is the persistence collaborator that supplies and stores
//! records; the engines themselves do no I/O and hold no mutable state.

pub mod database;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use error::InvalidInputError;
pub use models::{
    dominant_emotion, AnalysisResult, DreamFilter, DreamInsight, DreamRecord, DreamStatistics,
    Emotion, EmotionScores, InsightCategory, Lexicon, NewDream, SymbolMatch, SymbolTier,
};
pub use services::analysis_engine::analyze_dream;
pub use services::analytics_engine::{aggregate, aggregate_at};
pub use services::insight_engine::generate_insights;
pub use services::nlp_engine::NlpEngine;

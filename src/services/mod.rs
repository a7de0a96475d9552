pub mod analysis_engine;
pub mod analytics_engine;
pub mod insight_engine;
pub mod nlp_engine;

use crate::models::{
    dominant_emotion, AnalysisResult, DreamRecord, Emotion, EmotionScores, SymbolMatch,
};
use crate::services::nlp_engine::NlpEngine;

const SYMBOL_CONFIDENCE_STEP: f64 = 0.2;

/// Run the full per-dream analysis: emotion breakdown, ranked symbols, the
/// sectioned interpretation text, and the overall confidence score. Pure —
/// persistence of the result is the storage layer's job.
pub fn analyze_dream(nlp: &NlpEngine, dream: &DreamRecord) -> AnalysisResult {
    let emotions = nlp.analyze_emotion(&dream.dream_text);
    let symbols = nlp.extract_symbols(&dream.dream_text);

    let dominant = dominant_emotion(&emotions);
    let emotion_score = emotions.get(&dominant).copied().unwrap_or(0.0);
    let interpretation = build_interpretation(&emotions, &symbols, dream.lucidity_level);
    let confidence_score = confidence(&emotions, symbols.len());

    log::debug!(
        "analyzed dream {}: dominant={} symbols={} confidence={:.2}",
        dream.id,
        dominant,
        symbols.len(),
        confidence_score
    );

    AnalysisResult {
        dream_id: dream.id,
        dominant_emotion: dominant,
        emotion_score,
        emotion_breakdown: emotions,
        symbols,
        interpretation,
        confidence_score,
    }
}

/// Average of the strongest emotion signal and a symbol-count signal capped
/// at five symbols.
fn confidence(emotions: &EmotionScores, symbol_count: usize) -> f64 {
    let max_emotion = emotions.values().cloned().fold(0.0f64, f64::max);
    let symbol_confidence = (symbol_count as f64 * SYMBOL_CONFIDENCE_STEP).min(1.0);
    (max_emotion + symbol_confidence) / 2.0
}

fn build_interpretation(
    emotions: &EmotionScores,
    symbols: &[SymbolMatch],
    lucidity_level: i32,
) -> String {
    let divider = "=".repeat(40);
    let dominant = dominant_emotion(emotions);
    let intensity = emotions.get(&dominant).copied().unwrap_or(0.0);
    let mut out = String::new();

    out.push_str("EMOTIONAL ANALYSIS\n");
    out.push_str(&divider);
    out.push('\n');
    out.push_str(&format!("Primary Emotion: {}\n", capitalize(dominant.as_str())));
    let intensity_label = if intensity > 0.7 {
        "High"
    } else if intensity > 0.4 {
        "Moderate"
    } else {
        "Low"
    };
    out.push_str(&format!("Emotional Intensity: {}\n", intensity_label));

    let mut ranked: Vec<(Emotion, f64)> = emotions
        .iter()
        .filter(|(_, score)| **score > 0.0)
        .map(|(emotion, score)| (*emotion, *score))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    if !ranked.is_empty() {
        out.push_str("\nDetailed Emotional Profile:\n");
        for (emotion, score) in &ranked {
            out.push_str(&format!(
                "- {}: {:.0}%\n",
                capitalize(emotion.as_str()),
                score * 100.0
            ));
        }
    }

    if !symbols.is_empty() {
        out.push_str("\nSYMBOLIC ANALYSIS\n");
        out.push_str(&divider);
        out.push('\n');
        out.push_str(&format!("Key Symbols Found: {}\n\n", symbols.len()));
        for symbol in symbols {
            out.push_str(&format!("- {}\n", capitalize(&symbol.name)));
            out.push_str(&format!("  Meaning: {}\n", symbol.meaning));
        }
    }

    out.push_str("\nLUCIDITY ASSESSMENT\n");
    out.push_str(&divider);
    out.push('\n');
    out.push_str(&format!("Lucidity Level: {}/5\n", lucidity_level));
    if lucidity_level >= 3 {
        out.push_str("High lucidity - You had good awareness and control in this dream.\n");
    } else if lucidity_level >= 1 {
        out.push_str("Partial lucidity - Some awareness of the dream state was present.\n");
    } else {
        out.push_str("Non-lucid dream - Full immersion in the dream narrative.\n");
    }

    out.push_str("\nPSYCHOLOGICAL INTERPRETATION\n");
    out.push_str(&divider);
    out.push('\n');
    out.push_str(&psychological_insight(dominant, symbols));

    out.push_str("\nRECOMMENDATIONS\n");
    out.push_str(&divider);
    out.push('\n');
    out.push_str(&recommendations(dominant, lucidity_level));

    out
}

fn psychological_insight(dominant: Emotion, symbols: &[SymbolMatch]) -> String {
    let has = |name: &str| symbols.iter().any(|s| s.name == name);
    let mut insight = String::new();

    match dominant {
        Emotion::Fear => {
            insight.push_str(
                "This dream may reflect underlying anxieties or stressors in your waking life. ",
            );
            if has("falling") {
                insight.push_str(
                    "The falling sensation suggests feelings of losing control or fear of failure. ",
                );
            }
        }
        Emotion::Joy => {
            insight.push_str(
                "This dream indicates positive emotional processing and mental well-being. ",
            );
            if has("flying") {
                insight.push_str(
                    "Flying represents freedom and the desire to transcend current limitations. ",
                );
            }
        }
        Emotion::Anxiety => {
            insight.push_str("This dream may be processing daily stresses or unresolved concerns. ");
        }
        Emotion::Sadness => {
            insight
                .push_str("This dream may be helping you process grief, loss, or emotional healing. ");
            if has("death") {
                insight.push_str(
                    "Death in dreams typically symbolizes transformation rather than literal death. ",
                );
            }
        }
        _ => {
            insight.push_str(
                "This dream shows balanced emotional processing with multiple themes present. ",
            );
        }
    }
    insight.push('\n');
    insight
}

fn recommendations(dominant: Emotion, lucidity_level: i32) -> String {
    let mut out = String::new();
    match dominant {
        Emotion::Fear | Emotion::Anxiety => {
            out.push_str("- Practice relaxation techniques before sleep\n");
            out.push_str("- Consider journaling about current stressors\n");
        }
        Emotion::Sadness => {
            out.push_str("- Allow yourself time to process emotions\n");
            out.push_str("- Practice self-compassion\n");
        }
        Emotion::Joy => {
            out.push_str("- Reflect on what brings you happiness\n");
        }
        _ => {}
    }
    if lucidity_level < 2 {
        out.push_str("- Practice reality checks during the day\n");
        out.push_str("- Keep a consistent dream journal\n");
    } else {
        out.push_str("- Continue practicing lucid dreaming techniques\n");
        out.push_str("- Experiment with dream control exercises\n");
    }
    out
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dream(text: &str, lucidity: i32) -> DreamRecord {
        DreamRecord {
            id: 1,
            user_id: 1,
            dream_text: text.to_string(),
            dream_date: NaiveDate::from_ymd_opt(2024, 3, 10).expect("valid date"),
            sleep_quality: 7,
            lucidity_level: lucidity,
        }
    }

    #[test]
    fn confidence_averages_emotion_and_symbol_signals() {
        let nlp = NlpEngine::new();
        let result = analyze_dream(
            &nlp,
            &dream("I was flying over the ocean, it felt wonderful", 2),
        );
        // Dominant emotion normalizes to 1.0; two symbols contribute 0.4.
        assert_eq!(result.symbols.len(), 2);
        assert!((result.confidence_score - 0.7).abs() < 1e-9);
    }

    #[test]
    fn empty_text_still_produces_a_result() {
        let nlp = NlpEngine::new();
        let result = analyze_dream(&nlp, &dream("", 0));
        assert_eq!(result.dominant_emotion, Emotion::Joy);
        assert_eq!(result.emotion_score, 0.0);
        assert!(result.symbols.is_empty());
        assert_eq!(result.confidence_score, 0.0);
        assert!(result.interpretation.contains("Non-lucid dream"));
    }

    #[test]
    fn interpretation_mentions_sections_and_symbols() {
        let nlp = NlpEngine::new();
        let result = analyze_dream(
            &nlp,
            &dream("I was scared, being chased across a bridge over the river.", 4),
        );
        assert!(result.interpretation.contains("EMOTIONAL ANALYSIS"));
        assert!(result.interpretation.contains("SYMBOLIC ANALYSIS"));
        assert!(result.interpretation.contains("Lucidity Level: 4/5"));
        assert!(result.interpretation.contains("Bridge"));
        assert!(result
            .interpretation
            .contains("Practice relaxation techniques"));
    }

    #[test]
    fn symbol_cap_bounds_confidence_contribution() {
        let nlp = NlpEngine::new();
        let text = "water flying falling house car death school animal fire money";
        let result = analyze_dream(&nlp, &dream(text, 0));
        assert_eq!(result.symbols.len(), 8);
        // Symbol term saturates at 1.0; emotion term is whatever the cue
        // passes produce, so confidence is at most 1.0.
        assert!(result.confidence_score <= 1.0);
        assert!(result.confidence_score >= 0.5);
    }
}

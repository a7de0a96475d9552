use crate::models::{EmotionScores, Lexicon, SymbolMatch, SymbolTier};

const CUE_MATCH_WEIGHT: f64 = 0.1;
const INTENSIFIER_STEP: f64 = 0.2;
const DIMINISHER_STEP: f64 = 0.15;

const DIRECT_CONFIDENCE: f64 = 0.8;
const CONTEXTUAL_CONFIDENCE: f64 = 0.6;
const METAPHORICAL_CONFIDENCE: f64 = 0.5;
const MAX_SYMBOLS: usize = 8;

/// Lexicon-driven scorer and extractor. Holds the read-only lexicon and no
/// other state, so a single instance is safe to share across threads.
pub struct NlpEngine {
    lexicon: Lexicon,
}

impl Default for NlpEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl NlpEngine {
    pub fn new() -> Self {
        Self::with_lexicon(Lexicon::default())
    }

    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Score every known emotion for the given narrative. Values land in
    /// [0.0, 1.0]; unmatched emotions stay at 0.0. Empty or whitespace-only
    /// text yields an all-zero map.
    pub fn analyze_emotion(&self, text: &str) -> EmotionScores {
        let normalized = normalize_text(text);
        let mut raw = vec![0.0f64; self.lexicon.emotions.len()];

        // Word pass: exact token membership.
        for token in normalized.split_whitespace() {
            for (i, entry) in self.lexicon.emotions.iter().enumerate() {
                if entry.words.contains(&token) {
                    raw[i] += entry.word_weight;
                }
            }
        }

        // Phrase pass: each registered phrase contributes once when present.
        for (i, entry) in self.lexicon.emotions.iter().enumerate() {
            for phrase in entry.phrases {
                if normalized.contains(phrase) {
                    raw[i] += entry.phrase_weight;
                }
            }
        }

        // Contextual pass: non-overlapping cue matches at a tenth each.
        for (i, entry) in self.lexicon.emotions.iter().enumerate() {
            let matches = entry.cue_pattern.find_iter(&normalized).count();
            if matches > 0 {
                raw[i] += matches as f64 * CUE_MATCH_WEIGHT;
            }
        }

        // Normalize against the strongest emotion.
        let max = raw.iter().cloned().fold(0.0f64, f64::max);
        if max > 0.0 {
            for score in raw.iter_mut() {
                *score = (*score / max).min(1.0);
            }
        }

        // Intensity modifiers scale everything; the factor never goes below
        // zero, so scores stay inside [0, 1].
        let boosts = self.lexicon.intensifiers.find_iter(&normalized).count();
        let damps = self.lexicon.diminishers.find_iter(&normalized).count();
        let factor = (1.0 + boosts as f64 * INTENSIFIER_STEP - damps as f64 * DIMINISHER_STEP)
            .max(0.0);
        for score in raw.iter_mut() {
            *score = (*score * factor).min(1.0);
        }

        self.lexicon
            .emotions
            .iter()
            .zip(raw)
            .map(|(entry, score)| (entry.emotion, score))
            .collect()
    }

    /// Detect symbols at three confidence tiers, keep the best match per
    /// symbol, and return at most 8 ranked by confidence. Pure function of
    /// the text and the lexicon.
    pub fn extract_symbols(&self, text: &str) -> Vec<SymbolMatch> {
        let normalized = normalize_text(text);
        let mut candidates: Vec<SymbolMatch> = Vec::new();

        for entry in &self.lexicon.symbols {
            if normalized.contains(entry.name) {
                candidates.push(SymbolMatch {
                    name: entry.name.to_string(),
                    meaning: entry.interpretation.to_string(),
                    confidence: DIRECT_CONFIDENCE,
                    tier: SymbolTier::Direct,
                });
            }
        }

        for entry in &self.lexicon.symbols {
            if entry.context_clues.iter().any(|clue| normalized.contains(clue)) {
                candidates.push(SymbolMatch {
                    name: entry.name.to_string(),
                    meaning: entry.interpretation.to_string(),
                    confidence: CONTEXTUAL_CONFIDENCE,
                    tier: SymbolTier::Contextual,
                });
            }
        }

        // Sentence boundaries live in the raw text; normalization strips the
        // dots, so split first and normalize each sentence.
        for sentence in text.split('.') {
            let sentence = normalize_text(sentence);
            if sentence.is_empty() {
                continue;
            }
            for entry in &self.lexicon.symbols {
                for metaphor in entry.metaphors {
                    if sentence.contains(metaphor) {
                        candidates.push(SymbolMatch {
                            name: entry.name.to_string(),
                            meaning: entry.interpretation.to_string(),
                            confidence: METAPHORICAL_CONFIDENCE,
                            tier: SymbolTier::Metaphorical,
                        });
                    }
                }
            }
        }

        rank_symbols(candidates)
    }

    /// Labels-only projection of `extract_symbols`, same order and cap.
    pub fn extract_symbol_labels(&self, text: &str) -> Vec<String> {
        self.extract_symbols(text)
            .into_iter()
            .map(|m| m.name)
            .collect()
    }
}

/// Keep the best candidate per symbol (first encounter wins ties), then rank
/// by confidence. The sort is stable so equal confidences keep encounter
/// order, which makes the output reproducible.
fn rank_symbols(candidates: Vec<SymbolMatch>) -> Vec<SymbolMatch> {
    let mut best: Vec<SymbolMatch> = Vec::new();
    for candidate in candidates {
        match best.iter_mut().find(|m| m.name == candidate.name) {
            Some(existing) => {
                if candidate.confidence > existing.confidence {
                    *existing = candidate;
                }
            }
            None => best.push(candidate),
        }
    }
    best.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    best.truncate(MAX_SYMBOLS);
    best
}

/// Lowercase, drop every character outside `[a-z0-9]` and whitespace, then
/// collapse runs of whitespace. "Couldn't move!" becomes "couldnt move".
pub fn normalize_text(text: &str) -> String {
    let filtered: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect();
    filtered.split_whitespace().collect::<Vec<_>>().join(" ")
}

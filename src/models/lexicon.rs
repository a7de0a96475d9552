use regex::Regex;

use crate::models::Emotion;

/// Trigger vocabulary for one emotion: exact-token words, literal phrases,
/// their weights, and a broader cue pattern for the secondary contextual pass.
/// The cue patterns deliberately overlap the word lists to boost recall.
pub struct EmotionEntry {
    pub emotion: Emotion,
    pub words: &'static [&'static str],
    pub phrases: &'static [&'static str],
    pub word_weight: f64,
    pub phrase_weight: f64,
    pub cue_pattern: Regex,
}

/// One dream symbol: its interpretation plus the context-clue and metaphor
/// substrings that reveal it when the label itself is absent.
pub struct SymbolEntry {
    pub name: &'static str,
    pub interpretation: &'static str,
    pub context_clues: &'static [&'static str],
    pub metaphors: &'static [&'static str],
}

/// The read-only lexicon backing the NLP engine. Built once, then shared by
/// reference; nothing mutates it after construction.
pub struct Lexicon {
    pub emotions: Vec<EmotionEntry>,
    pub symbols: Vec<SymbolEntry>,
    pub intensifiers: Regex,
    pub diminishers: Regex,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

fn cue(pattern: &str) -> Regex {
    Regex::new(pattern).expect("lexicon cue pattern must compile")
}

impl Lexicon {
    pub fn new() -> Self {
        Self {
            emotions: default_emotion_entries(),
            symbols: default_symbol_entries(),
            intensifiers: cue(r"\b(very|extremely|incredibly|absolutely|terribly)\b"),
            diminishers: cue(r"\b(slightly|somewhat|a bit|kind of|sort of)\b"),
        }
    }

    pub fn symbol(&self, name: &str) -> Option<&SymbolEntry> {
        self.symbols.iter().find(|s| s.name == name)
    }
}

fn default_emotion_entries() -> Vec<EmotionEntry> {
    vec![
        EmotionEntry {
            emotion: Emotion::Joy,
            words: &["happy", "joy", "delighted", "ecstatic", "bliss", "elated"],
            phrases: &[
                "laughing together",
                "felt wonderful",
                "overflowing with happiness",
            ],
            word_weight: 1.0,
            phrase_weight: 1.5,
            cue_pattern: cue(
                r"\b(happy|joy|delight|excited|wonderful|amazing|beautiful|love|smile|laugh|celebration|peaceful|flying|light|bright)\b",
            ),
        },
        EmotionEntry {
            emotion: Emotion::Fear,
            words: &["scared", "afraid", "terrified", "frightened", "panic", "horror"],
            phrases: &[
                "running away",
                "being chased",
                "heart pounding",
                "couldnt move",
            ],
            word_weight: 1.0,
            phrase_weight: 1.5,
            cue_pattern: cue(
                r"\b(scared|afraid|terrified|frightening|horror|panic|nightmare|monster|danger|threat|chase|dark|shadow|hide)\b",
            ),
        },
        EmotionEntry {
            emotion: Emotion::Anxiety,
            words: &["worried", "nervous", "anxious", "stressed", "tense", "uneasy"],
            phrases: &["late for", "couldnt find", "lost in", "forgot something"],
            word_weight: 0.9,
            phrase_weight: 1.3,
            cue_pattern: cue(
                r"\b(worried|anxious|nervous|stress|tension|overwhelmed|confused|lost|trapped|hurried|late|exam|falling|searching)\b",
            ),
        },
        EmotionEntry {
            emotion: Emotion::Sadness,
            words: &["sad", "depressed", "mournful", "grief", "sorrow", "melancholy"],
            phrases: &[
                "crying alone",
                "felt empty",
                "everything was grey",
                "lost forever",
            ],
            word_weight: 1.0,
            phrase_weight: 1.4,
            cue_pattern: cue(
                r"\b(sad|crying|tears|lonely|empty|dark|gloomy|depressed|grief|loss|death|grey|rain|alone|abandoned)\b",
            ),
        },
        EmotionEntry {
            emotion: Emotion::Peace,
            words: &["calm", "peaceful", "serene", "tranquil", "content", "relaxed"],
            phrases: &[
                "floating gently",
                "quiet stillness",
                "warm comfort",
                "soft light",
            ],
            word_weight: 0.8,
            phrase_weight: 1.2,
            cue_pattern: cue(
                r"\b(calm|peaceful|serene|quiet|gentle|soft|warm|comfort|safe|relaxed|tranquil|still|floating)\b",
            ),
        },
        EmotionEntry {
            emotion: Emotion::Excitement,
            words: &[
                "excited",
                "thrilled",
                "energetic",
                "enthusiastic",
                "eager",
                "animated",
            ],
            phrases: &[
                "heart racing",
                "couldnt wait",
                "bursting with energy",
                "adventure awaits",
            ],
            word_weight: 0.9,
            phrase_weight: 1.3,
            cue_pattern: cue(
                r"\b(thrilled|energetic|adventure|flying|fast|rushing|bright|intense|powerful|exhilarating|racing|bursting)\b",
            ),
        },
        EmotionEntry {
            emotion: Emotion::Confusion,
            words: &[
                "confused",
                "disoriented",
                "bewildered",
                "perplexed",
                "puzzled",
                "lost",
            ],
            phrases: &[
                "didnt make sense",
                "everything changed",
                "couldnt understand",
                "maze like",
            ],
            word_weight: 0.8,
            phrase_weight: 1.2,
            cue_pattern: cue(
                r"\b(confused|strange|weird|bizarre|unclear|foggy|mixed|chaotic|disoriented|maze|lost|uncertain|puzzled)\b",
            ),
        },
        EmotionEntry {
            emotion: Emotion::Anger,
            words: &[
                "angry",
                "furious",
                "enraged",
                "irritated",
                "frustrated",
                "outraged",
            ],
            phrases: &[
                "screaming loudly",
                "red with anger",
                "tearing things",
                "stormed out",
            ],
            word_weight: 1.0,
            phrase_weight: 1.5,
            cue_pattern: cue(
                r"\b(angry|furious|enraged|irritated|frustrated|outraged|screaming|yelling|fighting|red|hot|storming)\b",
            ),
        },
        EmotionEntry {
            emotion: Emotion::Surprise,
            words: &["surprised", "shocked", "astonished", "amazed", "startled"],
            phrases: &["couldnt believe", "suddenly appeared", "unexpected turn"],
            word_weight: 0.7,
            phrase_weight: 1.1,
            cue_pattern: cue(
                r"\b(surprised|shocked|astonished|amazed|startled|unexpected|suddenly)\b",
            ),
        },
        EmotionEntry {
            emotion: Emotion::Love,
            words: &["love", "affection", "caring", "devotion", "passion"],
            phrases: &["heart filled with", "embraced warmly", "deep connection"],
            word_weight: 0.9,
            phrase_weight: 1.4,
            cue_pattern: cue(
                r"\b(love|affection|caring|devotion|passion|romance|heart|embrace|kiss|hug)\b",
            ),
        },
    ]
}

fn default_symbol_entries() -> Vec<SymbolEntry> {
    vec![
        SymbolEntry {
            name: "water",
            interpretation: "Represents emotions, subconscious mind, purification, and life transitions",
            context_clues: &["ocean", "river", "rain", "flood", "swimming", "drowning"],
            metaphors: &["emotional flow", "deep feelings", "cleansing tears"],
        },
        SymbolEntry {
            name: "flying",
            interpretation: "Symbolizes freedom, ambition, transcendence, and desire to escape limitations",
            context_clues: &["soaring", "floating", "wings", "sky", "clouds"],
            metaphors: &["reaching new heights", "free spirit", "unlimited potential"],
        },
        SymbolEntry {
            name: "falling",
            interpretation: "Indicates loss of control, insecurity, fear of failure, or letting go",
            context_clues: &["plummeting", "descending", "cliff", "height", "drop"],
            metaphors: &["losing grip", "sinking feeling", "downward spiral"],
        },
        SymbolEntry {
            name: "house",
            interpretation: "Represents the self, mind, different aspects of personality, or security",
            context_clues: &["rooms", "doors", "windows", "basement", "attic"],
            metaphors: &["inner self", "mental spaces", "personal boundaries"],
        },
        SymbolEntry {
            name: "car",
            interpretation: "Symbolizes life direction, personal control, journey, or motivation",
            context_clues: &["driving", "road", "steering wheel", "engine", "passenger"],
            metaphors: &["life path", "personal drive", "direction in life"],
        },
        SymbolEntry {
            name: "death",
            interpretation: "Represents transformation, endings, rebirth, or major life changes",
            context_clues: &["died", "ghost", "cemetery", "funeral", "afterlife"],
            metaphors: &["end of era", "spiritual transition", "letting go"],
        },
        SymbolEntry {
            name: "school",
            interpretation: "Symbolizes learning, personal growth, evaluation, or past experiences",
            context_clues: &["classroom", "teacher", "exam", "homework", "graduation"],
            metaphors: &["life lessons", "personal development", "self evaluation"],
        },
        SymbolEntry {
            name: "animal",
            interpretation: "Represents instincts, primal nature, or specific animal traits",
            context_clues: &["wild", "pet", "hunting", "running", "growling"],
            metaphors: &["primal instincts", "natural behavior", "inner nature"],
        },
        SymbolEntry {
            name: "fire",
            interpretation: "Symbolizes passion, transformation, destruction, or purification",
            context_clues: &["flames", "burning", "heat", "light", "smoke"],
            metaphors: &["burning desire", "transformative energy", "cleansing fire"],
        },
        SymbolEntry {
            name: "money",
            interpretation: "Represents self-worth, value, resources, or emotional currency",
            context_clues: &["cash", "rich", "poor", "coins", "wealth"],
            metaphors: &["self value", "emotional resources", "personal worth"],
        },
        SymbolEntry {
            name: "bridge",
            interpretation: "Symbolizes transitions, connections, decisions, or life changes",
            context_clues: &["crossing", "river", "gap", "connection", "path"],
            metaphors: &["life transition", "making connections", "bridging gaps"],
        },
        SymbolEntry {
            name: "tree",
            interpretation: "Represents growth, stability, family roots, or personal development",
            context_clues: &["forest", "roots", "branches", "leaves", "growing"],
            metaphors: &["personal growth", "family roots", "life stability"],
        },
        SymbolEntry {
            name: "mirror",
            interpretation: "Symbolizes self-reflection, truth, identity, or hidden aspects",
            context_clues: &["reflection", "glass", "image", "looking", "double"],
            metaphors: &["self examination", "facing truth", "hidden self"],
        },
    ]
}

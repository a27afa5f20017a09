//! Heuristic AI-likeness analysis and probabilistic humanization for prose.
//!
//! Word segmentation is whitespace-based and matching is done with
//! case-insensitive word-boundary regexes; scripts without whitespace word
//! boundaries are a known limitation.

use once_cell::sync::Lazy;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use regex::{Captures, Regex};
use serde::Serialize;

// ---------------------------------------------------------------------------
// Data structures
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextStats {
    pub chars: usize,
    pub words: usize,
    pub sentences: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlaggedPhrase {
    pub phrase: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    pub ai_score: i32,
    pub readability_score: i32,
    pub word_count: usize,
    pub sentence_count: usize,
    pub suggestions: Vec<String>,
    pub flagged_phrases: Vec<FlaggedPhrase>,
}

/// Intensity of the rewrite: scales the per-match replacement probability
/// and enables structural rewriting at `Heavy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HumanizationLevel {
    Light,
    Medium,
    Heavy,
}

impl HumanizationLevel {
    fn replacement_probability(self) -> f64 {
        match self {
            HumanizationLevel::Light => TN.light_probability,
            HumanizationLevel::Medium => TN.medium_probability,
            HumanizationLevel::Heavy => TN.heavy_probability,
        }
    }
}

/// Style target: selects the synonym dictionary, the structural phrase
/// list, and whether contraction folding applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WritingMode {
    General,
    Professional,
}

// ---------------------------------------------------------------------------
// Tunables
// ---------------------------------------------------------------------------

struct Tunables {
    trigger_score_basis: f64,
    low_variance_threshold: f64,
    low_variance_penalty: f64,
    high_variance_threshold: f64,
    high_variance_bonus: f64,
    ai_score_min: i32,
    ai_score_max: i32,
    readability_base: f64,
    readability_length_weight: f64,
    readability_floor: f64,
    buzzword_advice_min: usize,
    uniform_variance_threshold: f64,
    long_sentence_avg: f64,
    short_text_words: usize,
    light_probability: f64,
    medium_probability: f64,
    heavy_probability: f64,
    general_filler_probability: f64,
    general_filler_min_chars: usize,
    professional_filler_probability: f64,
    professional_filler_min_chars: usize,
}

static TN: Tunables = Tunables {
    trigger_score_basis: 300.0,
    low_variance_threshold: 10.0,
    low_variance_penalty: 20.0,
    high_variance_threshold: 50.0,
    high_variance_bonus: 10.0,
    ai_score_min: 5,
    ai_score_max: 99,
    readability_base: 100.0,
    readability_length_weight: 2.0,
    readability_floor: 10.0,
    buzzword_advice_min: 2,
    uniform_variance_threshold: 15.0,
    long_sentence_avg: 25.0,
    short_text_words: 20,
    light_probability: 0.3,
    medium_probability: 0.6,
    heavy_probability: 0.9,
    general_filler_probability: 0.25,
    general_filler_min_chars: 10,
    professional_filler_probability: 0.2,
    professional_filler_min_chars: 15,
};

const TRIGGER_REASON: &str = "Commonly overused by AI.";

const SUGGEST_BUZZWORDS: &str = "Reduce the use of complex, 'buzzword' vocabulary.";
const SUGGEST_VARY_STRUCTURE: &str =
    "Vary your sentence structure. Mix short and long sentences.";
const SUGGEST_LONG_SENTENCES: &str = "Your sentences are quite long. Try breaking them up.";
const SUGGEST_TOO_SHORT: &str = "Text is too short for accurate analysis.";

// ---------------------------------------------------------------------------
// Trigger words
// ---------------------------------------------------------------------------

static TRIGGER_WORDS: &[&str] = &[
    "delve",
    "leverage",
    "paramount",
    "crucial",
    "pivotal",
    "seamless",
    "holistic",
    "robust",
    "innovative",
    "groundbreaking",
    "multifaceted",
    "meticulous",
    "foster",
    "harness",
    "unlock",
    "streamline",
    "showcase",
    "underscore",
    "elevate",
    "tapestry",
    "landscape",
    "realm",
    "journey",
    "paradigm",
    "testament",
];

static TRIGGER_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    TRIGGER_WORDS
        .iter()
        .map(|w| Regex::new(&format!(r"(?i)\b{}\b", regex::escape(w))).unwrap())
        .collect()
});

// ---------------------------------------------------------------------------
// Synonym dictionaries
// ---------------------------------------------------------------------------

// Ordered pair lists: substitution is applied key by key over the evolving
// text, so declaration order is part of the behavior.

static GENERAL_PAIRS: &[(&str, &str)] = &[
    ("utilize", "use"),
    ("leverage", "use"),
    ("commence", "start"),
    ("terminate", "end"),
    ("endeavor", "try"),
    ("facilitate", "help"),
    ("assist", "help"),
    ("demonstrate", "show"),
    ("subsequently", "later"),
    ("additionally", "also"),
    ("furthermore", "also"),
    ("nevertheless", "still"),
    ("approximately", "about"),
    ("sufficient", "enough"),
    ("numerous", "many"),
    ("obtain", "get"),
    ("purchase", "buy"),
    ("inquire", "ask"),
    ("optimal", "best"),
    ("delve into", "dig into"),
];

static PROFESSIONAL_PAIRS: &[(&str, &str)] = &[
    ("get", "obtain"),
    ("buy", "purchase"),
    ("start", "commence"),
    ("end", "conclude"),
    ("help", "assist"),
    ("show", "demonstrate"),
    ("big", "substantial"),
    ("a lot of", "a considerable number of"),
    ("kind of", "somewhat"),
    ("really", "significantly"),
    ("also", "additionally"),
    ("but", "however"),
    ("so", "therefore"),
    ("think", "believe"),
    ("need", "require"),
    ("use", "utilize"),
];

fn compile_dictionary(
    pairs: &'static [(&'static str, &'static str)],
) -> Vec<(Regex, &'static str)> {
    pairs
        .iter()
        .map(|&(key, value)| {
            let re = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(key))).unwrap();
            (re, value)
        })
        .collect()
}

static GENERAL_DICT: Lazy<Vec<(Regex, &'static str)>> =
    Lazy::new(|| compile_dictionary(GENERAL_PAIRS));

static PROFESSIONAL_DICT: Lazy<Vec<(Regex, &'static str)>> =
    Lazy::new(|| compile_dictionary(PROFESSIONAL_PAIRS));

static GENERAL_FILLERS: &[&str] = &[
    "Honestly,",
    "Basically,",
    "You know,",
    "Look,",
    "To be fair,",
    "Actually,",
];

static PROFESSIONAL_TRANSITIONS: &[&str] = &[
    "Furthermore,",
    "Consequently,",
    "In addition,",
    "Moreover,",
    "Therefore,",
    "Notably,",
];

static CONTRACTION_PAIRS: &[(&str, &str)] = &[
    ("cannot", "can't"),
    ("do not", "don't"),
    ("is not", "isn't"),
    ("we are", "we're"),
    ("they are", "they're"),
    ("it is", "it's"),
];

static CONTRACTIONS: Lazy<Vec<(Regex, &'static str)>> =
    Lazy::new(|| compile_dictionary(CONTRACTION_PAIRS));

// Sentence segments are the runs of text between terminal-punctuation runs.
static SENTENCE_BREAK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

// ---------------------------------------------------------------------------
// Stats helper
// ---------------------------------------------------------------------------

fn sentence_segments(text: &str) -> impl Iterator<Item = &str> {
    SENTENCE_BREAK_RE
        .split(text)
        .filter(|segment| !segment.trim().is_empty())
}

/// Character, word, and sentence counts for a block of text. Total over all
/// strings; empty input yields all zeros.
pub fn get_stats(text: &str) -> TextStats {
    let trimmed = text.trim();
    let words = if trimmed.is_empty() {
        0
    } else {
        trimmed.split_whitespace().count()
    };
    TextStats {
        chars: text.chars().count(),
        words,
        sentences: sentence_segments(text).count(),
    }
}

// ---------------------------------------------------------------------------
// Analysis engine
// ---------------------------------------------------------------------------

/// Scores text for AI-typical stylistic markers. Deterministic: identical
/// input always yields an identical result.
pub fn analyze_text(text: &str) -> AnalysisResult {
    let stats = get_stats(text);

    if stats.words == 0 {
        return AnalysisResult {
            ai_score: 0,
            readability_score: 100,
            word_count: 0,
            sentence_count: stats.sentences,
            suggestions: vec![],
            flagged_phrases: vec![],
        };
    }

    // Trigger scan: total occurrences feed the score; each distinct word is
    // flagged once, in trigger-list order.
    let mut triggers_found = 0usize;
    let mut flagged_phrases = Vec::new();
    for (word, re) in TRIGGER_WORDS.iter().zip(TRIGGER_RES.iter()) {
        let occurrences = re.find_iter(text).count();
        if occurrences > 0 {
            triggers_found += occurrences;
            flagged_phrases.push(FlaggedPhrase {
                phrase: (*word).to_string(),
                reason: TRIGGER_REASON.to_string(),
            });
        }
    }

    // Population variance of per-sentence word counts.
    let lengths: Vec<f64> = sentence_segments(text)
        .map(|segment| segment.split_whitespace().count() as f64)
        .collect();
    let divisor = lengths.len().max(1) as f64;
    let avg_length = lengths.iter().sum::<f64>() / divisor;
    let variance = lengths
        .iter()
        .map(|len| (len - avg_length).powi(2))
        .sum::<f64>()
        / divisor;

    let mut base = triggers_found as f64 / stats.words as f64 * TN.trigger_score_basis;
    if variance < TN.low_variance_threshold {
        base += TN.low_variance_penalty;
    }
    if variance > TN.high_variance_threshold {
        base -= TN.high_variance_bonus;
    }
    let ai_score = (base.round() as i32).clamp(TN.ai_score_min, TN.ai_score_max);

    let readability_score = (TN.readability_base - avg_length * TN.readability_length_weight)
        .max(TN.readability_floor)
        .round() as i32;

    let mut suggestions = Vec::new();
    if triggers_found > TN.buzzword_advice_min {
        suggestions.push(SUGGEST_BUZZWORDS.to_string());
    }
    if variance < TN.uniform_variance_threshold {
        suggestions.push(SUGGEST_VARY_STRUCTURE.to_string());
    }
    if avg_length > TN.long_sentence_avg {
        suggestions.push(SUGGEST_LONG_SENTENCES.to_string());
    }
    if stats.words < TN.short_text_words {
        suggestions.push(SUGGEST_TOO_SHORT.to_string());
    }

    AnalysisResult {
        ai_score,
        readability_score,
        word_count: stats.words,
        sentence_count: stats.sentences,
        suggestions,
        flagged_phrases,
    }
}

// ---------------------------------------------------------------------------
// Humanization engine
// ---------------------------------------------------------------------------

/// Rewrites text toward a more natural register. Non-deterministic: each
/// call draws fresh entropy for the substitution and filler coin flips.
pub fn humanize_text(text: &str, level: HumanizationLevel, mode: WritingMode) -> String {
    humanize_with(text, level, mode, &mut SmallRng::from_entropy())
}

/// [`humanize_text`] with an injected random source, so callers and tests
/// can seed a [`SmallRng`] for reproducible output.
pub fn humanize_with<R: Rng>(
    text: &str,
    level: HumanizationLevel,
    mode: WritingMode,
    rng: &mut R,
) -> String {
    let dictionary = match mode {
        WritingMode::General => &*GENERAL_DICT,
        WritingMode::Professional => &*PROFESSIONAL_DICT,
    };
    let probability = level.replacement_probability();

    let mut working = text.to_string();
    for (re, replacement) in dictionary {
        working = re
            .replace_all(&working, |caps: &Captures| {
                if rng.gen::<f64>() < probability {
                    (*replacement).to_string()
                } else {
                    caps[0].to_string()
                }
            })
            .into_owned();
    }

    if level == HumanizationLevel::Heavy {
        working = insert_fillers(&working, mode, rng);
    }

    if mode == WritingMode::General {
        working = fold_contractions(&working);
    }

    working
}

fn insert_fillers<R: Rng>(text: &str, mode: WritingMode, rng: &mut R) -> String {
    let (fillers, probability, min_chars) = match mode {
        WritingMode::General => (
            GENERAL_FILLERS,
            TN.general_filler_probability,
            TN.general_filler_min_chars,
        ),
        WritingMode::Professional => (
            PROFESSIONAL_TRANSITIONS,
            TN.professional_filler_probability,
            TN.professional_filler_min_chars,
        ),
    };

    // Literal ". " split, not a sentence splitter: other punctuation stays
    // inside its segment and the joins are restored exactly.
    text.split(". ")
        .map(|segment| {
            if segment.chars().count() > min_chars && rng.gen::<f64>() < probability {
                let filler = fillers[rng.gen_range(0..fillers.len())];
                let mut chars = segment.chars();
                match chars.next() {
                    Some(first) => {
                        format!("{} {}{}", filler, first.to_lowercase(), chars.as_str())
                    }
                    None => segment.to_string(),
                }
            } else {
                segment.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(". ")
}

fn fold_contractions(text: &str) -> String {
    let mut working = text.to_string();
    for (re, replacement) in CONTRACTIONS.iter() {
        working = re.replace_all(&working, *replacement).into_owned();
    }
    working
}

//! Lexicon-based compound sentiment scoring
//!
//! A valence-lexicon scorer implementing the [`SentimentScorer`] seam:
//! each known word contributes a signed valence, preceding negations flip
//! and dampen it, preceding intensity boosters push it further from zero,
//! and the summed valence is squashed into a [-1, 1] compound score.

use std::collections::HashMap;
use threadsift_domain::traits::SentimentScorer;

/// Valence adjustment contributed by an intensity booster word.
const BOOST: f64 = 0.293;

/// Scalar applied to a valence when a negation precedes it.
const NEGATION_FACTOR: f64 = -0.74;

/// Normalization constant for the compound squash.
const COMPOUND_ALPHA: f64 = 15.0;

/// Signed word valences on a roughly [-4, 4] scale.
const LEXICON: &[(&str, f64)] = &[
    ("amazing", 2.8),
    ("angry", -2.3),
    ("annoyed", -1.8),
    ("annoying", -1.8),
    ("awesome", 3.1),
    ("awful", -2.0),
    ("bad", -2.5),
    ("beautiful", 2.9),
    ("best", 3.2),
    ("better", 1.9),
    ("brilliant", 2.8),
    ("broken", -1.8),
    ("crash", -1.7),
    ("crashed", -1.6),
    ("crisis", -2.5),
    ("cry", -2.1),
    ("crying", -2.2),
    ("danger", -2.4),
    ("dangerous", -2.3),
    ("dead", -3.3),
    ("death", -2.9),
    ("delighted", 2.9),
    ("die", -2.9),
    ("died", -2.9),
    ("disappointed", -2.1),
    ("disappointing", -2.2),
    ("disappointment", -2.2),
    ("disaster", -3.1),
    ("dumb", -2.3),
    ("easy", 1.9),
    ("enjoy", 2.2),
    ("enjoyed", 2.3),
    ("excellent", 2.7),
    ("excited", 2.3),
    ("exciting", 2.2),
    ("fail", -2.5),
    ("failed", -2.3),
    ("fails", -2.3),
    ("failure", -2.4),
    ("fantastic", 2.6),
    ("favorite", 2.0),
    ("fear", -2.2),
    ("fine", 0.8),
    ("fraud", -2.8),
    ("fun", 2.3),
    ("glad", 2.0),
    ("good", 1.9),
    ("gorgeous", 2.9),
    ("grateful", 2.4),
    ("great", 3.1),
    ("happy", 2.7),
    ("hate", -2.7),
    ("hated", -2.6),
    ("hates", -2.2),
    ("helpful", 1.8),
    ("hope", 1.9),
    ("hopeful", 1.9),
    ("horrible", -2.5),
    ("hurt", -2.4),
    ("impressive", 2.3),
    ("improved", 1.9),
    ("improvement", 1.6),
    ("interesting", 1.7),
    ("joy", 2.8),
    ("kill", -3.7),
    ("killed", -3.2),
    ("liar", -2.7),
    ("lie", -1.8),
    ("lies", -1.8),
    ("like", 1.5),
    ("liked", 1.7),
    ("lose", -1.8),
    ("losing", -1.9),
    ("lost", -1.7),
    ("love", 3.2),
    ("loved", 2.9),
    ("lucky", 2.4),
    ("lying", -2.2),
    ("nice", 1.8),
    ("nightmare", -2.7),
    ("optimistic", 2.4),
    ("outrage", -2.6),
    ("outrageous", -2.3),
    ("outstanding", 3.1),
    ("pain", -2.5),
    ("painful", -2.3),
    ("panic", -2.4),
    ("pathetic", -2.6),
    ("perfect", 2.7),
    ("pleasant", 2.3),
    ("pleased", 2.2),
    ("poor", -2.1),
    ("positive", 2.3),
    ("problem", -1.7),
    ("problems", -1.7),
    ("promising", 1.8),
    ("proud", 2.6),
    ("recommend", 1.5),
    ("relief", 1.9),
    ("relieved", 2.0),
    ("ruin", -2.2),
    ("ruined", -2.4),
    ("sad", -2.1),
    ("safe", 1.9),
    ("satisfied", 2.0),
    ("scam", -2.6),
    ("severe", -1.8),
    ("shame", -2.1),
    ("shameful", -2.5),
    ("shocked", -1.4),
    ("shocking", -1.7),
    ("sick", -2.0),
    ("smart", 1.7),
    ("solid", 1.5),
    ("strong", 2.3),
    ("stupid", -2.4),
    ("success", 2.7),
    ("successful", 2.8),
    ("superb", 3.0),
    ("support", 1.7),
    ("terrible", -2.1),
    ("thank", 1.5),
    ("thanks", 1.9),
    ("threat", -1.9),
    ("thrilled", 3.0),
    ("toxic", -2.4),
    ("triumph", 2.9),
    ("trouble", -1.9),
    ("ugly", -2.6),
    ("unhappy", -2.1),
    ("upset", -1.9),
    ("useful", 1.9),
    ("useless", -1.8),
    ("valuable", 2.1),
    ("victory", 2.8),
    ("violence", -3.1),
    ("violent", -2.9),
    ("waste", -1.8),
    ("wasted", -2.0),
    ("weak", -1.8),
    ("welcome", 2.0),
    ("win", 2.8),
    ("winner", 2.8),
    ("winning", 2.8),
    ("won", 2.7),
    ("wonderful", 2.7),
    ("worried", -1.9),
    ("worry", -1.9),
    ("worrying", -1.9),
    ("worse", -2.1),
    ("worst", -3.1),
    ("wow", 2.8),
    ("wrong", -2.1),
];

/// Words that flip the polarity of what follows.
const NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "didnt", "doesnt", "dont",
    "isnt", "neither", "never", "no", "none", "nor", "not", "nothing",
    "rarely", "seldom", "shouldnt", "wasnt", "werent", "without", "wont",
    "wouldnt",
];

/// Words that push the following valence further from zero.
const INTENSIFIERS: &[&str] = &[
    "absolutely", "completely", "extremely", "hugely", "incredibly",
    "really", "so", "super", "totally", "very",
];

/// Words that pull the following valence toward zero.
const DAMPENERS: &[&str] = &["barely", "hardly", "kinda", "marginally", "slightly", "somewhat"];

/// Built-in lexicon scorer.
///
/// Deterministic and side-effect free; one instance serves a whole run.
pub struct LexiconScorer {
    valences: HashMap<&'static str, f64>,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconScorer {
    /// Build the scorer from the embedded lexicon.
    pub fn new() -> Self {
        Self {
            valences: LEXICON.iter().copied().collect(),
        }
    }

    /// Adjusted valence for one matched token given up to three
    /// preceding context tokens, nearest first.
    fn adjusted_valence(&self, base: f64, context: &[&str]) -> f64 {
        let mut valence = base;
        for (distance, &previous) in context.iter().enumerate() {
            // Context further away carries slightly less weight
            let damp = match distance {
                0 => 1.0,
                1 => 0.95,
                _ => 0.9,
            };
            if NEGATIONS.contains(&previous) {
                valence *= NEGATION_FACTOR;
            } else if INTENSIFIERS.contains(&previous) {
                valence += BOOST * damp * valence.signum();
            } else if DAMPENERS.contains(&previous) {
                valence -= BOOST * damp * valence.signum();
            }
        }
        valence
    }
}

impl SentimentScorer for LexiconScorer {
    fn compound(&self, text: &str) -> f64 {
        let tokens = sentiment_tokens(text);
        let mut sum = 0.0;
        for (i, token) in tokens.iter().enumerate() {
            if let Some(&base) = self.valences.get(token.as_str()) {
                let start = i.saturating_sub(3);
                let context: Vec<&str> = tokens[start..i]
                    .iter()
                    .rev()
                    .map(String::as_str)
                    .collect();
                sum += self.adjusted_valence(base, &context);
            }
        }
        if sum == 0.0 {
            return 0.0;
        }
        sum / (sum * sum + COMPOUND_ALPHA).sqrt()
    }
}

/// Lowercase tokens with apostrophes removed, so "don't" negates as
/// "dont".
fn sentiment_tokens(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric() && c != '\'')
        .map(|token| token.replace('\'', ""))
        .filter(|token| !token.is_empty())
        .collect()
}

use crate::error::PipelineError;
use crate::sentiment::words::{EMOTICONS, FILLERS, INTENSIFIERS, NEGATIONS, WORDS};
use crate::sentiment::SentimentModel;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A user-supplied lexicon row. Rows with `intensity` become intensifiers;
/// rows with a non-zero polarity or subjectivity become sentiment words.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconEntry {
    pub word: String,
    #[serde(default)]
    pub polarity: f64,
    #[serde(default)]
    pub subjectivity: f64,
    #[serde(default)]
    pub intensity: Option<f64>,
}

#[derive(Debug, Clone, Copy)]
struct Weight {
    polarity: f64,
    subjectivity: f64,
}

/// Pattern-style averaging model over a static word table.
#[derive(Debug, Clone)]
pub struct LexiconModel {
    words: HashMap<String, Weight>,
    intensifiers: HashMap<String, f64>,
}

impl Default for LexiconModel {
    fn default() -> Self {
        let mut words = HashMap::with_capacity(WORDS.len() + EMOTICONS.len());
        for &(word, polarity, subjectivity) in WORDS.iter().chain(EMOTICONS) {
            words.insert(
                word.to_string(),
                Weight {
                    polarity,
                    subjectivity,
                },
            );
        }

        let intensifiers = INTENSIFIERS
            .iter()
            .map(|&(w, m)| (w.to_string(), m))
            .collect();

        Self {
            words,
            intensifiers,
        }
    }
}

impl LexiconModel {
    /// Built-in lexicon, extended by the JSON file at `path` when given.
    pub fn load(path: Option<&str>) -> anyhow::Result<Self> {
        let mut model = Self::default();
        let Some(path) = path else {
            return Ok(model);
        };

        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read sentiment lexicon {path}"))?;
        let entries = serde_json::from_str::<Vec<LexiconEntry>>(&text)
            .with_context(|| format!("sentiment lexicon {path} is not a JSON array of entries"))?;
        let count = entries.len();
        model.extend(entries)?;

        tracing::info!(path, entries = count, "loaded sentiment lexicon overrides");
        Ok(model)
    }

    pub fn extend(&mut self, entries: Vec<LexiconEntry>) -> Result<(), PipelineError> {
        for entry in entries {
            let word = entry.word.trim().to_lowercase();
            if word.is_empty() {
                return Err(PipelineError::validation("lexicon word must be non-empty"));
            }
            if !(-1.0..=1.0).contains(&entry.polarity) {
                return Err(PipelineError::validation(format!(
                    "lexicon polarity for {word:?} must be in [-1, 1] (got {})",
                    entry.polarity
                )));
            }
            if !(0.0..=1.0).contains(&entry.subjectivity) {
                return Err(PipelineError::validation(format!(
                    "lexicon subjectivity for {word:?} must be in [0, 1] (got {})",
                    entry.subjectivity
                )));
            }

            if let Some(m) = entry.intensity {
                if !(m.is_finite() && m > 0.0) {
                    return Err(PipelineError::validation(format!(
                        "lexicon intensity for {word:?} must be positive (got {m})"
                    )));
                }
                self.intensifiers.insert(word.clone(), m);
            }
            if entry.polarity != 0.0 || entry.subjectivity != 0.0 {
                self.words.insert(
                    word,
                    Weight {
                        polarity: entry.polarity,
                        subjectivity: entry.subjectivity,
                    },
                );
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn assessments(&self, text: &str) -> Vec<(f64, f64)> {
        let tokens = tokenize(text);
        let mut out = Vec::new();
        let mut negated = false;
        let mut multiplier: Option<f64> = None;

        for (i, tok) in tokens.iter().enumerate() {
            let tok = tok.as_str();

            if is_negation(tok) {
                negated = true;
                continue;
            }

            // Words like "pretty" or "super" intensify only when a sentiment word
            // or another intensifier follows.
            let next_is_word = tokens.get(i + 1).is_some_and(|next| {
                self.words.contains_key(next.as_str())
                    || self.intensifiers.contains_key(next.as_str())
            });
            if let (Some(&m), true) = (self.intensifiers.get(tok), next_is_word) {
                multiplier = Some(multiplier.unwrap_or(1.0) * m);
                continue;
            }

            if let Some(w) = self.words.get(tok) {
                let m = multiplier.unwrap_or(1.0);
                let mut polarity = (w.polarity * m).clamp(-1.0, 1.0);
                let subjectivity = (w.subjectivity * m).clamp(0.0, 1.0);
                if negated {
                    polarity *= -0.5;
                }
                out.push((polarity, subjectivity));
                negated = false;
                multiplier = None;
                continue;
            }

            if !FILLERS.contains(&tok) {
                negated = false;
                multiplier = None;
            }
        }

        out
    }
}

impl SentimentModel for LexiconModel {
    fn analyze(&self, text: &str) -> (f64, f64) {
        let assessed = self.assessments(text);
        if assessed.is_empty() {
            return (0.0, 0.0);
        }

        let n = assessed.len() as f64;
        let polarity = assessed.iter().map(|(p, _)| p).sum::<f64>() / n;
        let subjectivity = assessed.iter().map(|(_, s)| s).sum::<f64>() / n;
        (polarity.clamp(-1.0, 1.0), subjectivity.clamp(0.0, 1.0))
    }
}

fn is_negation(tok: &str) -> bool {
    NEGATIONS.contains(&tok) || tok.ends_with("n't")
}

fn tokenize(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    for chunk in text.split_whitespace() {
        if EMOTICONS.iter().any(|(e, _, _)| *e == chunk) {
            out.push(chunk.to_string());
            continue;
        }

        let lowered = chunk.to_lowercase().replace('\u{2019}', "'");
        for piece in lowered.split(|c: char| !(c.is_alphanumeric() || c == '\'')) {
            let piece = piece.trim_matches('\'');
            if !piece.is_empty() {
                out.push(piece.to_string());
            }
        }
    }
    out
}

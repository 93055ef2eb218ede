pub mod lexicon;
mod words;

pub use lexicon::{LexiconEntry, LexiconModel};

use crate::domain::{Sentiment, SentimentScore};

/// Maps text to `(polarity, subjectivity)`.
///
/// Implementations must return polarity in [-1, 1] and subjectivity in [0, 1],
/// and `(0.0, 0.0)` for text they cannot assess.
pub trait SentimentModel: Send + Sync {
    fn analyze(&self, text: &str) -> (f64, f64);
}

pub fn score<M: SentimentModel + ?Sized>(model: &M, text: &str) -> SentimentScore {
    let (polarity, subjectivity) = model.analyze(text);
    SentimentScore {
        polarity,
        subjectivity,
        sentiment: Sentiment::from_polarity(polarity),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_text_is_positive() {
        let model = LexiconModel::default();
        let s = score(&model, "I love this, amazing video!");
        assert!(s.polarity > 0.0, "polarity={}", s.polarity);
        assert_eq!(s.sentiment, Sentiment::Positive);
    }

    #[test]
    fn negative_text_is_negative() {
        let model = LexiconModel::default();
        let s = score(&model, "This is terrible and boring");
        assert!(s.polarity < 0.0, "polarity={}", s.polarity);
        assert_eq!(s.sentiment, Sentiment::Negative);
    }

    #[test]
    fn empty_text_is_neutral_zero() {
        let model = LexiconModel::default();
        let s = score(&model, "");
        assert_eq!(s.polarity, 0.0);
        assert_eq!(s.subjectivity, 0.0);
        assert_eq!(s.sentiment, Sentiment::Neutral);
    }

    #[test]
    fn unknown_words_are_neutral_zero() {
        let model = LexiconModel::default();
        let s = score(&model, "first 12:34 <br> https://example.com");
        assert_eq!((s.polarity, s.subjectivity), (0.0, 0.0));
        assert_eq!(s.sentiment, Sentiment::Neutral);
    }

    #[test]
    fn scoring_is_deterministic() {
        let model = LexiconModel::default();
        let text = "Not bad at all, really funny but the audio was awful :(";
        assert_eq!(score(&model, text), score(&model, text));
    }

    struct Fixed(f64);

    impl SentimentModel for Fixed {
        fn analyze(&self, _text: &str) -> (f64, f64) {
            (self.0, 0.5)
        }
    }

    #[test]
    fn label_follows_model_sign() {
        assert_eq!(score(&Fixed(1e-9), "x").sentiment, Sentiment::Positive);
        assert_eq!(score(&Fixed(-1e-9), "x").sentiment, Sentiment::Negative);
        assert_eq!(score(&Fixed(0.0), "x").sentiment, Sentiment::Neutral);
    }
}

use crate::{model::WordValues, normalizer::words, Result, SentimentError};

/// Predicts a score for a normalized `review` by averaging the values of every word the model
/// knows. Words missing from the model are ignored; if none of them are known the result is
/// [`SentimentError::NoPrediction`].
pub fn predict_score(model: &WordValues, review: &str) -> Result<f64> {
    let (total, matched) = words(review)
        .filter_map(|word| model.get(word))
        .fold((0.0, 0usize), |(total, matched), value| {
            (total + value, matched + 1)
        });
    if matched == 0 {
        return Err(SentimentError::NoPrediction);
    }
    Ok(total / matched as f64)
}

/// A labeled review along with the score the model predicted for it.
#[derive(Debug)]
pub struct LabeledPrediction {
    pub actual: Option<i64>,
    pub predicted: Result<f64>,
    pub text: String,
}

impl LabeledPrediction {
    /// Distance between prediction and label, when both exist.
    pub fn error(&self) -> Option<f64> {
        match (&self.predicted, self.actual) {
            (Ok(predicted), Some(actual)) => Some((predicted - actual as f64).abs()),
            _ => None,
        }
    }
}

/// Strips the leading score off a normalized, labeled line and predicts from the rest.
/// A line that doesn't start with an integer is treated as unlabeled text.
pub fn predict_line(model: &WordValues, line: &str) -> LabeledPrediction {
    let trimmed = line.trim_start();
    let (label, rest) = trimmed.split_once(char::is_whitespace).unwrap_or((trimmed, ""));
    let (actual, text) = match label.parse::<i64>() {
        Ok(score) => (Some(score), rest.trim()),
        Err(_) => (None, trimmed.trim_end()),
    };
    LabeledPrediction {
        actual,
        predicted: predict_score(model, text),
        text: text.to_owned(),
    }
}

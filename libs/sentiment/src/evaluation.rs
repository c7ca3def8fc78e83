//! Scores a labeled test set against a trained model.

use log::debug;

use crate::{
    model::WordValues,
    predictor::{predict_line, LabeledPrediction},
};

/// A snapshot of how a model did on a set of labeled reviews.
#[derive(Debug)]
pub struct Evaluation {
    pub predictions: Vec<LabeledPrediction>,
    /// Reviews the model produced a score for.
    pub predicted: usize,
    /// Reviews with no word known to the model.
    pub unpredicted: usize,
    /// Mean absolute error over every review with both a label and a prediction.
    pub mean_absolute_error: Option<f64>,
}

impl Evaluation {
    pub fn len(&self) -> usize {
        self.predictions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty()
    }
}

/// Runs every normalized `line` through [`predict_line`]. Blank lines are skipped.
pub fn evaluate<S: AsRef<str>>(model: &WordValues, lines: &[S]) -> Evaluation {
    let predictions = lines
        .iter()
        .map(|line| line.as_ref())
        .filter(|line| !line.trim().is_empty())
        .map(|line| predict_line(model, line))
        .collect::<Vec<LabeledPrediction>>();
    let predicted = predictions.iter().filter(|p| p.predicted.is_ok()).count();
    let errors = predictions
        .iter()
        .filter_map(LabeledPrediction::error)
        .collect::<Vec<f64>>();
    let mean_absolute_error = if errors.is_empty() {
        None
    } else {
        Some(errors.iter().sum::<f64>() / errors.len() as f64)
    };
    debug!(
        "evaluated {} reviews, {} scored against a label",
        predictions.len(),
        errors.len()
    );
    Evaluation {
        unpredicted: predictions.len() - predicted,
        predicted,
        mean_absolute_error,
        predictions,
    }
}

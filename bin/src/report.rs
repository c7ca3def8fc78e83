use sentiment::{Evaluation, LabeledPrediction, Result};

pub(crate) fn format_score(score: &Result<f64>) -> String {
    match score {
        Ok(score) => format!("{:.1}", score),
        Err(_) => String::from("n/a"),
    }
}

pub(crate) fn prediction_line(prediction: &LabeledPrediction) -> String {
    let actual = match prediction.actual {
        Some(score) => format!("{} {}", score, prediction.text),
        None => prediction.text.clone(),
    };
    format!(
        "Predicted: {} Actual: {}",
        format_score(&prediction.predicted),
        actual.trim_end()
    )
}

pub(crate) fn summary(evaluation: &Evaluation) -> String {
    let mut line = format!(
        "{} reviews, {} predicted, {} without a prediction",
        evaluation.len(),
        evaluation.predicted,
        evaluation.unpredicted
    );
    if let Some(mae) = evaluation.mean_absolute_error {
        line.push_str(&format!(", mean absolute error {:.2}", mae));
    }
    line
}

pub(crate) fn model_table(model: &sentiment::WordValues) -> String {
    model
        .sorted()
        .into_iter()
        .map(|(word, value)| format!("{:>6.2}  {}", value, word))
        .collect::<Vec<String>>()
        .join("\n")
}

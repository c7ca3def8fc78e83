use std::{io, path::PathBuf};

use thiserror::Error;

pub mod aggregator;
pub mod evaluation;
pub mod loader;
pub mod model;
pub mod normalizer;
pub mod predictor;

pub use self::aggregator::{aggregate, WordStat, WordStats};
pub use self::evaluation::{evaluate, Evaluation};
pub use self::loader::{lines_from_file, load_lines};
pub use self::model::{build_model, NeutralBand, WordValues};
pub use self::normalizer::normalize;
pub use self::predictor::{predict_line, predict_score, LabeledPrediction};

#[derive(Error, Debug)]
pub enum SentimentError {
    #[error("could not find review file {}", .path.display())]
    SourceNotFound { path: PathBuf },
    #[error("could not read reviews")]
    Unreadable(#[from] io::Error),
    #[error("line {line}: expected a numeric score, found {token:?}")]
    MalformedLabel { line: usize, token: String },
    #[error("line {line}: total score for {word:?} is out of range")]
    ScoreOverflow { line: usize, word: String },
    #[error("no words in the review are known to the model")]
    NoPrediction,
    #[error("invalid neutral band [{lower}, {upper}]")]
    InvalidBand { lower: f64, upper: f64 },
}

pub type Result<T> = std::result::Result<T, SentimentError>;

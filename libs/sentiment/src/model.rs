use std::{
    cmp::Ordering,
    collections::{hash_map, HashMap},
    path::Path,
};

use log::{info, warn};
use serde::Serialize;

use crate::{aggregator::aggregate, loader::lines_from_file, Result, SentimentError, WordStats};

pub const NEUTRAL_LOWER: f64 = 1.75;
pub const NEUTRAL_UPPER: f64 = 2.25;

/// Averages inside `[lower, upper]` (bounds included) carry no signal and are left out of
/// the model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeutralBand {
    lower: f64,
    upper: f64,
}

impl Default for NeutralBand {
    fn default() -> Self {
        NeutralBand {
            lower: NEUTRAL_LOWER,
            upper: NEUTRAL_UPPER,
        }
    }
}

impl NeutralBand {
    pub fn new(lower: f64, upper: f64) -> Result<Self> {
        if !lower.is_finite() || !upper.is_finite() || lower > upper {
            return Err(SentimentError::InvalidBand { lower, upper });
        }
        Ok(NeutralBand { lower, upper })
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub fn contains(&self, average: f64) -> bool {
        average >= self.lower && average <= self.upper
    }
}

/// The trained model: every informative word mapped to its average review score.
///
/// Built once and never touched again, so a reference can be handed to as many readers as
/// needed.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct WordValues {
    values: HashMap<String, f64>,
}

impl WordValues {
    /// Aggregates normalized, labeled `lines` and builds the model from them.
    pub fn train<S: AsRef<str>>(lines: &[S], band: NeutralBand) -> Result<Self> {
        let stats = aggregate(lines)?;
        Ok(build_model(&stats, band))
    }

    /// Loads a review file and trains on it. Nothing is returned unless every step succeeds.
    pub fn from_file(path: &Path, band: NeutralBand) -> Result<Self> {
        let lines = lines_from_file(path)?;
        let model = Self::train(&lines, band)?;
        info!(
            "learned {} words from {} reviews in {}",
            model.len(),
            lines.len(),
            path.display()
        );
        Ok(model)
    }

    pub fn get(&self, word: &str) -> Option<f64> {
        self.values.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, f64> {
        self.values.iter()
    }

    /// Entries from the most positive to the most negative word, ties broken alphabetically.
    pub fn sorted(&self) -> Vec<(&str, f64)> {
        let mut entries = self
            .values
            .iter()
            .map(|(word, value)| (word.as_str(), *value))
            .collect::<Vec<(&str, f64)>>();
        entries.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(b.0))
        });
        entries
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Turns aggregated totals into averages, dropping every word that falls in `band`.
pub fn build_model(stats: &WordStats, band: NeutralBand) -> WordValues {
    let values = stats
        .iter()
        .map(|(word, stat)| (word, stat.average()))
        .filter(|(_, average)| !band.contains(*average))
        .map(|(word, average)| (word.to_owned(), average))
        .collect::<HashMap<String, f64>>();
    if values.is_empty() && !stats.is_empty() {
        warn!(
            "all {} words fell inside the neutral band [{}, {}]",
            stats.len(),
            band.lower,
            band.upper
        );
    }
    WordValues { values }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REVIEWS: [&str; 3] = ["3 great movie", "1 bad movie", "3 great acting"];

    #[test]
    fn keeps_only_informative_words() {
        let model = WordValues::train(&REVIEWS, NeutralBand::default()).unwrap();
        assert_eq!(model.len(), 3);
        assert_eq!(model.get("great"), Some(3.0));
        assert_eq!(model.get("bad"), Some(1.0));
        assert_eq!(model.get("acting"), Some(3.0));
        assert_eq!(model.get("movie"), None);
    }

    #[test]
    fn band_bounds_are_excluded() {
        // 7 / 4 == 1.75 and 9 / 4 == 2.25 exactly
        let lines = [
            "1 low", "2 low", "2 low", "2 low",
            "2 high", "2 high", "2 high", "3 high",
        ];
        let model = WordValues::train(&lines, NeutralBand::default()).unwrap();
        assert!(model.is_empty());
    }

    fn corpus(word: &str, low: i64, low_count: usize, high: i64, high_count: usize) -> Vec<String> {
        let mut lines = vec![format!("{} {}", low, word); low_count];
        lines.extend(vec![format!("{} {}", high, word); high_count]);
        lines
    }

    #[test]
    fn builds_words_just_outside_the_band() {
        // 174999 / 100000 and 225001 / 100000
        let mut lines = corpus("slow", 1, 25_001, 2, 74_999);
        lines.extend(corpus("sharp", 3, 25_001, 2, 74_999));
        // 175000 / 100000 and 225000 / 100000
        lines.extend(corpus("plain", 1, 25_000, 2, 75_000));
        lines.extend(corpus("fine", 3, 25_000, 2, 75_000));
        let stats = aggregate(&lines).unwrap();
        assert_eq!(stats.get("slow").unwrap().average(), 1.74999);
        assert_eq!(stats.get("sharp").unwrap().average(), 2.25001);
        let model = build_model(&stats, NeutralBand::default());
        assert_eq!(model.len(), 2);
        assert_eq!(model.get("slow"), Some(1.74999));
        assert_eq!(model.get("sharp"), Some(2.25001));
        assert_eq!(model.get("plain"), None);
        assert_eq!(model.get("fine"), None);
    }

    #[test]
    fn band_contains_its_bounds() {
        let band = NeutralBand::default();
        assert!(!band.contains(1.74999));
        assert!(!band.contains(2.25001));
        assert!(band.contains(1.75));
        assert!(band.contains(2.25));
        assert!(band.contains(2.0));
    }

    #[test]
    fn averages_near_the_bounds() {
        // 17 / 10 == 1.7 and 23 / 10 == 2.3
        let mut lines = vec!["1 dull"; 3];
        lines.extend(vec!["2 dull"; 7]);
        lines.extend(vec!["3 sharp"; 3]);
        lines.extend(vec!["2 sharp"; 7]);
        let model = WordValues::train(&lines, NeutralBand::default()).unwrap();
        assert_eq!(model.len(), 2);
        assert!((model.get("dull").unwrap() - 1.7).abs() < 1e-9);
        assert!((model.get("sharp").unwrap() - 2.3).abs() < 1e-9);
    }

    #[test]
    fn custom_band() {
        let band = NeutralBand::new(0.5, 3.5).unwrap();
        let model = WordValues::train(&REVIEWS, band).unwrap();
        assert!(model.is_empty());
        let band = NeutralBand::new(2.0, 2.0).unwrap();
        let model = WordValues::train(&REVIEWS, band).unwrap();
        assert_eq!(model.get("movie"), None);
        assert_eq!(model.len(), 3);
    }

    #[test]
    fn rejects_bad_bands() {
        assert!(matches!(
            NeutralBand::new(3.0, 1.0),
            Err(SentimentError::InvalidBand { .. })
        ));
        assert!(NeutralBand::new(f64::NAN, 1.0).is_err());
        assert!(NeutralBand::new(1.0, f64::INFINITY).is_err());
    }

    #[test]
    fn malformed_corpus_builds_nothing() {
        assert!(matches!(
            WordValues::train(&["3 good", "oops 1 bad"], NeutralBand::default()),
            Err(SentimentError::MalformedLabel { line: 2, .. })
        ));
    }

    #[test]
    fn missing_corpus_builds_nothing() {
        let path = std::env::temp_dir().join("sentiment-no-such-corpus.txt");
        assert!(matches!(
            WordValues::from_file(&path, NeutralBand::default()),
            Err(SentimentError::SourceNotFound { .. })
        ));
    }

    #[test]
    fn trains_from_file() {
        let path = std::env::temp_dir().join(format!("sentiment-{}-corpus.txt", std::process::id()));
        std::fs::write(&path, "3 Great movie!\n1 Bad movie.\n3 Great acting\n").unwrap();
        let model = WordValues::from_file(&path, NeutralBand::default());
        std::fs::remove_file(&path).unwrap();
        assert_eq!(model.unwrap().get("great"), Some(3.0));
    }

    #[test]
    fn sorted_from_positive_to_negative() {
        let model = WordValues::train(&REVIEWS, NeutralBand::default()).unwrap();
        assert_eq!(
            model.sorted(),
            vec![("acting", 3.0), ("great", 3.0), ("bad", 1.0)]
        );
    }

    #[test]
    fn dumps_as_json_object() {
        let model = WordValues::train(&["1 bad"], NeutralBand::default()).unwrap();
        let dumped: HashMap<String, f64> = serde_json::from_str(&model.to_json().unwrap()).unwrap();
        assert_eq!(dumped.get("bad"), Some(&1.0));
        assert_eq!(dumped.len(), 1);
    }
}

use std::collections::{hash_map, HashMap};

use log::debug;

use crate::{normalizer::words, Result, SentimentError};

/// Running score total and occurrence count for a single word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordStat {
    pub total: i64,
    pub count: u64,
}

impl WordStat {
    /// Adds `score` to the running total. Returns `None` and leaves the stat untouched when the
    /// total would no longer fit.
    fn record(&mut self, score: i64) -> Option<()> {
        self.total = self.total.checked_add(score)?;
        self.count += 1;
        Some(())
    }

    pub fn average(&self) -> f64 {
        self.total as f64 / self.count as f64
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WordStats {
    stats: HashMap<String, WordStat>,
}

impl WordStats {
    pub fn get(&self, word: &str) -> Option<&WordStat> {
        self.stats.get(word)
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, WordStat> {
        self.stats.iter()
    }
}

impl<'a> IntoIterator for &'a WordStats {
    type Item = (&'a String, &'a WordStat);
    type IntoIter = hash_map::Iter<'a, String, WordStat>;

    fn into_iter(self) -> Self::IntoIter {
        self.stats.iter()
    }
}

/// Collects the total score and count of every word across `lines`.
///
/// Lines are expected to be normalized and to start with an integer score. A line whose
/// first token isn't an integer (a blank line included) fails the whole run with
/// [`SentimentError::MalformedLabel`]; a word whose total no longer fits in an `i64` fails it
/// with [`SentimentError::ScoreOverflow`].
pub fn aggregate<S: AsRef<str>>(lines: &[S]) -> Result<WordStats> {
    let mut stats: HashMap<String, WordStat> = HashMap::new();
    for (idx, line) in lines.iter().enumerate() {
        let mut tokens = words(line.as_ref());
        let label = tokens.next().unwrap_or_default();
        let score = label
            .parse::<i64>()
            .map_err(|_| SentimentError::MalformedLabel {
                line: idx + 1,
                token: label.to_owned(),
            })?;
        for word in tokens {
            match stats.get_mut(word) {
                Some(stat) => stat
                    .record(score)
                    .ok_or_else(|| SentimentError::ScoreOverflow {
                        line: idx + 1,
                        word: word.to_owned(),
                    })?,
                None => {
                    stats.insert(word.to_owned(), WordStat { total: score, count: 1 });
                }
            }
        }
    }
    debug!("aggregated {} distinct words from {} lines", stats.len(), lines.len());
    Ok(WordStats { stats })
}

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use log::debug;

use crate::{normalizer::normalize, Result, SentimentError};

/// Reads every line from `reader` and normalizes it. Blank lines are kept so the output
/// lines up one-to-one with the input.
pub fn load_lines<R: BufRead>(reader: R) -> Result<Vec<String>> {
    reader
        .lines()
        .map(|line| -> Result<String> { Ok(normalize(&line?)) })
        .collect()
}

/// Opens `path` and hands it to [`load_lines`]. A missing file surfaces as
/// [`SentimentError::SourceNotFound`]; the caller decides what to tell the user.
pub fn lines_from_file(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => SentimentError::SourceNotFound {
            path: path.to_owned(),
        },
        _ => SentimentError::Unreadable(e),
    })?;
    let lines = load_lines(BufReader::new(file))?;
    debug!("read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

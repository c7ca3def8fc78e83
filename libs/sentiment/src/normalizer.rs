use regex::Regex;

lazy_static::lazy_static! {
    // Anything that isn't a lowercase ascii letter, a digit or a plain space.
    pub(crate) static ref STRIP_RGX: Regex = Regex::new(r"[^a-z0-9 ]").unwrap();
}

/// Lowercases `raw` and strips every character outside of `[a-z0-9 ]`.
///
/// Training lines and prediction input both go through here so the words used for lookup
/// line up with the ones the model was built from.
pub fn normalize(raw: &str) -> String {
    STRIP_RGX.replace_all(&raw.to_lowercase(), "").into_owned()
}

/// Splits a normalized line into its words.
pub(crate) fn words(line: &str) -> impl Iterator<Item = &str> {
    line.split_whitespace()
}

//! Keyword selection and keyword list parsing.

use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::BTreeSet;
use tracing::{debug, info};

/// Pick a random keyword from `master` that is not in `used`.
///
/// When every keyword has been used, `used` is cleared and the whole list is
/// available again. Returns `None` only for an empty master list. Nothing is
/// marked used here.
pub fn next_keyword(master: &[String], used: &mut BTreeSet<String>) -> Option<String> {
    next_keyword_with(master, used, &mut rand::thread_rng())
}

/// [`next_keyword`] with a caller-supplied random source.
pub fn next_keyword_with<R: Rng + ?Sized>(
    master: &[String],
    used: &mut BTreeSet<String>,
    rng: &mut R,
) -> Option<String> {
    let mut available: Vec<&String> = master.iter().filter(|k| !used.contains(*k)).collect();

    if available.is_empty() && !master.is_empty() {
        info!(total = master.len(), "All keywords used, starting over");
        used.clear();
        available = master.iter().collect();
    }

    let choice = available.choose(rng).map(|k| (*k).clone());
    debug!(available = available.len(), keyword = ?choice, "Selected keyword");
    choice
}

/// Parse a keyword file: one keyword per line, blank lines and `#` comments
/// skipped.
pub fn parse_keyword_file(text: &str) -> Vec<String> {
    dedup(
        text.lines()
            .filter(|line| !line.starts_with('#'))
            .map(str::trim),
    )
}

/// Parse an inline keyword list.
///
/// Accepts a JSON array of strings, otherwise one keyword per line if the
/// text spans several lines, otherwise a comma-separated list.
pub fn parse_keyword_list(text: &str) -> Vec<String> {
    if let Ok(list) = serde_json::from_str::<Vec<String>>(text) {
        return dedup(list.iter().map(|k| k.trim()));
    }
    if text.trim().contains('\n') {
        return dedup(text.lines().map(str::trim));
    }
    dedup(text.split(',').map(str::trim))
}

fn dedup<'a>(keywords: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    keywords
        .filter(|k| !k.is_empty())
        .filter(|k| seen.insert(*k))
        .map(str::to_string)
        .collect()
}

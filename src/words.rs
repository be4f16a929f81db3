//! Word sources: split text into the words fed to a trie.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Whitespace-separated words of `text`, in order. Never yields empty words.
pub fn split_words(text: &str) -> impl Iterator<Item = &str> + '_ {
    text.split_whitespace()
}

/// Collect every word from `reader`, line by line.
pub fn read_words<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        words.extend(split_words(&line).map(str::to_owned));
    }
    Ok(words)
}

/// Collect every word from the file at `path`.
pub fn read_words_from_path(path: impl AsRef<Path>) -> io::Result<Vec<String>> {
    let path = path.as_ref();
    let words = read_words(BufReader::new(File::open(path)?))?;
    log::debug!("read {} words from {}", words.len(), path.display());
    Ok(words)
}

//! Word filter for chirp bodies.
//!
//! A word is a maximal run of non-space characters. Only the ASCII space
//! separates words, so punctuation stays attached ("fornax!" is not banned).

const BANNED_WORDS: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];

const REPLACEMENT: &str = "****";

/// Split text into alternating runs of spaces and non-spaces.
///
/// Concatenating the segments reproduces the input exactly.
fn segments(text: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut in_space = text.starts_with(' ');

    for (index, c) in text.char_indices() {
        if (c == ' ') != in_space {
            segments.push(&text[start..index]);
            start = index;
            in_space = !in_space;
        }
    }

    if start < text.len() {
        segments.push(&text[start..]);
    }

    segments
}

fn is_banned(word: &str) -> bool {
    let word = word.to_lowercase();
    BANNED_WORDS.iter().any(|banned| *banned == word)
}

/// Whether any whole word of `text` is banned, ignoring case.
pub fn contains_profanity(text: &str) -> bool {
    segments(text).into_iter().any(is_banned)
}

/// Replace every banned word with `****`, keeping all spacing intact.
pub fn censor(text: &str) -> String {
    segments(text)
        .into_iter()
        .map(|segment| if is_banned(segment) { REPLACEMENT } else { segment })
        .collect()
}

// WHY: Single source of truth for the scanner alphabet
// Classification is defined over printable ASCII only; everything else is Other

/// Category of a single input character as seen by the scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Extends the current word buffer
    WordChar,
    /// Sentence-ending punctuation: `.`, `!`, `?`
    Terminator,
    /// Word separator: space or newline
    Space,
    /// Anything outside the alphabet; silently dropped
    Other,
}

/// Sentence-ending punctuation recognised by the scanner
pub const TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Classify a character after ASCII lower-casing
pub fn classify(ch: char) -> CharClass {
    let ch = ch.to_ascii_lowercase();

    if TERMINATORS.contains(&ch) {
        return CharClass::Terminator;
    }

    if ch == ' ' || ch == '\n' {
        return CharClass::Space;
    }

    match ch as u32 {
        97..=122 | 34..=64 | 91..=96 | 123..=126 => CharClass::WordChar,
        _ => CharClass::Other,
    }
}

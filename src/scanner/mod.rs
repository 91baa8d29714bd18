// WHY: Character-driven DFA that segments text into words and sentences
// Drives classification, word correction and line wrapping in a single pass

use serde::{Deserialize, Serialize};
use tracing::debug;

pub mod classifier;
pub mod corrections;
pub mod line_wrap;
pub mod plain;

pub use classifier::{classify, CharClass};
pub use corrections::{CorrectionTable, DEFAULT_CORRECTIONS};
pub use line_wrap::{rewrap_at_boundaries, LineWrapper, DEFAULT_WRAP_COLUMN};

/// Scanner automaton states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// Accumulating a word
    Word,
    /// Between words; only whitespace seen since the last word
    Deadspace,
    /// After a terminator; the next word is sentence-initial
    SentenceEnd,
}

impl Default for ScanState {
    fn default() -> Self {
        // The first word of the text is sentence-initial
        ScanState::SentenceEnd
    }
}

/// Counters collected during a scan
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Input characters consumed
    pub chars_consumed: u64,
    /// Characters classified as Other and dropped
    pub chars_ignored: u64,
    /// Words emitted, including a trailing unterminated word
    pub words_emitted: u64,
    /// Words whose emitted form differs from the buffered form
    pub words_corrected: u64,
    /// Terminators written to the output
    pub sentences_terminated: u64,
    /// Line breaks inserted by the wrapper
    pub line_breaks: u64,
}

/// Accumulated output text
#[derive(Debug, Default)]
pub struct OutputStream {
    text: String,
    words_corrected: u64,
}

impl OutputStream {
    /// Write the corrected form of a completed word
    pub fn push_word(&mut self, word: &str, table: &CorrectionTable) {
        let corrected = table.correct(word);
        if corrected != word {
            self.words_corrected += 1;
        }
        self.text.push_str(&corrected);
    }

    /// Words written by `push_word` whose form changed
    pub fn words_corrected(&self) -> u64 {
        self.words_corrected
    }

    pub fn push(&mut self, ch: char) {
        self.text.push(ch);
    }

    pub fn push_str(&mut self, s: &str) {
        self.text.push_str(s);
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

/// Result of a completed scan
#[derive(Debug, Clone)]
pub struct Normalized {
    pub text: String,
    pub stats: ScanStats,
}

/// Emit a terminator followed by exactly two spaces
fn emit_terminator(ch: char, output: &mut OutputStream) {
    output.push(ch);
    output.push_str("  ");
}

/// Pure per-character transition of the corrected scanner
///
/// `ch` must already have been classified as `class`. The word buffer is only
/// cleared after its corrected form has been written.
pub fn transition(
    state: ScanState,
    class: CharClass,
    ch: char,
    word: &mut String,
    output: &mut OutputStream,
    table: &CorrectionTable,
) -> ScanState {
    match (state, class) {
        (ScanState::Word, CharClass::Terminator) => {
            output.push_word(word, table);
            emit_terminator(ch.to_ascii_lowercase(), output);
            word.clear();
            ScanState::SentenceEnd
        }
        (ScanState::Word, CharClass::Space) => {
            output.push_word(word, table);
            output.push(' ');
            word.clear();
            ScanState::Deadspace
        }
        (ScanState::Word, CharClass::WordChar) => {
            word.push(ch.to_ascii_lowercase());
            ScanState::Word
        }
        (ScanState::Deadspace, CharClass::Terminator) => {
            emit_terminator(ch.to_ascii_lowercase(), output);
            ScanState::SentenceEnd
        }
        (ScanState::Deadspace, CharClass::WordChar) => {
            word.clear();
            word.push(ch.to_ascii_lowercase());
            ScanState::Word
        }
        (ScanState::SentenceEnd, CharClass::WordChar) => {
            word.push(ch.to_ascii_uppercase());
            ScanState::Word
        }
        (ScanState::Deadspace, CharClass::Space)
        | (ScanState::SentenceEnd, CharClass::Terminator | CharClass::Space) => state,
        (_, CharClass::Other) => state,
    }
}

/// Streaming scanner holding the state threaded through every step
pub struct Scanner<'t> {
    table: &'t CorrectionTable,
    state: ScanState,
    word: String,
    output: OutputStream,
    wrapper: LineWrapper,
    stats: ScanStats,
}

impl<'t> Scanner<'t> {
    pub fn new(table: &'t CorrectionTable) -> Self {
        Self::with_wrapper(table, LineWrapper::default())
    }

    pub fn with_wrapper(table: &'t CorrectionTable, wrapper: LineWrapper) -> Self {
        Self {
            table,
            state: ScanState::default(),
            word: String::new(),
            output: OutputStream::default(),
            wrapper,
            stats: ScanStats::default(),
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    pub fn current_word(&self) -> &str {
        &self.word
    }

    pub fn output(&self) -> &str {
        self.output.as_str()
    }

    /// Consume one input character
    pub fn step(&mut self, ch: char) {
        let class = classify(ch);
        self.record(class);

        self.state = transition(self.state, class, ch, &mut self.word, &mut self.output, self.table);

        if self.wrapper.advance() {
            self.output.push('\n');
            self.stats.line_breaks += 1;
        }
    }

    /// Consume every character of `text`
    pub fn feed(&mut self, text: &str) {
        self.output.text.reserve(text.len());
        for ch in text.chars() {
            self.step(ch);
        }
    }

    /// Flush the trailing word and return the normalized text
    ///
    /// The trailing word is written as buffered, without passing through the
    /// correction table.
    pub fn finish(mut self) -> Normalized {
        if !self.word.is_empty() {
            self.output.push_str(&self.word);
            self.stats.words_emitted += 1;
        }
        self.stats.words_corrected = self.output.words_corrected();

        debug!(
            chars = self.stats.chars_consumed,
            words = self.stats.words_emitted,
            corrected = self.stats.words_corrected,
            "Scan finished"
        );

        Normalized {
            text: self.output.into_string(),
            stats: self.stats,
        }
    }

    fn record(&mut self, class: CharClass) {
        self.stats.chars_consumed += 1;
        match (self.state, class) {
            (_, CharClass::Other) => self.stats.chars_ignored += 1,
            (ScanState::Word, CharClass::Terminator | CharClass::Space) => {
                self.stats.words_emitted += 1;
                if class == CharClass::Terminator {
                    self.stats.sentences_terminated += 1;
                }
            }
            (ScanState::Deadspace, CharClass::Terminator) => self.stats.sentences_terminated += 1,
            _ => {}
        }
    }
}

/// Normalize a whole text with the default correction table
pub fn normalize(text: &str) -> Normalized {
    normalize_with(text, &CorrectionTable::default())
}

/// Normalize a whole text with a custom correction table
pub fn normalize_with(text: &str, table: &CorrectionTable) -> Normalized {
    let mut scanner = Scanner::new(table);
    scanner.feed(text);
    scanner.finish()
}

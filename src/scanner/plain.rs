// WHY: Base automaton without word buffering, corrections or wrapping
// Same states and alphabet as the corrected scanner; characters are written as they arrive

use super::{classify, CharClass, OutputStream, ScanState, ScanStats};

/// Pure per-character transition of the plain scanner
pub fn plain_transition(state: ScanState, class: CharClass, ch: char, output: &mut OutputStream) -> ScanState {
    match (state, class) {
        (ScanState::Word | ScanState::Deadspace, CharClass::Terminator) => {
            output.push(ch);
            output.push_str("  ");
            ScanState::SentenceEnd
        }
        (ScanState::Word, CharClass::Space) => {
            output.push(' ');
            ScanState::Deadspace
        }
        (ScanState::Word | ScanState::Deadspace, CharClass::WordChar) => {
            output.push(ch.to_ascii_lowercase());
            ScanState::Word
        }
        (ScanState::SentenceEnd, CharClass::WordChar) => {
            output.push(ch.to_ascii_uppercase());
            ScanState::Word
        }
        (ScanState::Deadspace | ScanState::SentenceEnd, CharClass::Space)
        | (ScanState::SentenceEnd, CharClass::Terminator) => state,
        (_, CharClass::Other) => state,
    }
}

/// Run the plain automaton over a whole text
///
/// Stats are counted like the corrected scanner's; `words_corrected` and
/// `line_breaks` stay zero.
pub fn normalize_plain(text: &str) -> (String, ScanStats) {
    let mut output = OutputStream::default();
    let mut state = ScanState::default();
    let mut stats = ScanStats::default();

    for ch in text.chars() {
        let class = classify(ch);
        record(&mut stats, state, class);
        state = plain_transition(state, class, ch, &mut output);
    }

    if state == ScanState::Word {
        stats.words_emitted += 1;
    }

    (output.into_string(), stats)
}

fn record(stats: &mut ScanStats, state: ScanState, class: CharClass) {
    stats.chars_consumed += 1;
    match (state, class) {
        (_, CharClass::Other) => stats.chars_ignored += 1,
        (ScanState::Word, CharClass::Terminator) => {
            stats.words_emitted += 1;
            stats.sentences_terminated += 1;
        }
        (ScanState::Word, CharClass::Space) => stats.words_emitted += 1,
        (ScanState::Deadspace, CharClass::Terminator) => stats.sentences_terminated += 1,
        _ => {}
    }
}

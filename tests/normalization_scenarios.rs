// End-to-end behavior of the corrected scanner through the public API

use prosefix::scanner::{CorrectionTable, DEFAULT_CORRECTIONS};
use prosefix::{classify, normalize, normalize_with, CharClass, LineWrapper, ScanState, Scanner};

#[test]
fn test_contraction_and_phrase_substitution() {
    assert_eq!(normalize("i'm the-goat.").text, "I am Mr. Jimenez.  ");
}

#[test]
fn test_misspellings_with_sentence_initial_capital() {
    // The opening word is sentence-initial, so its capital survives correction
    assert_eq!(normalize("seperate wich.").text, "Separate which.  ");
}

#[test]
fn test_unterminated_trailing_word_is_not_corrected() {
    assert_eq!(normalize("hello world").text, "Hello world");
    // Mid-stream the same word would be corrected
    assert_eq!(normalize("hello wich").text, "Hello wich");
    assert_eq!(normalize("hello wich ").text, "Hello which ");
}

#[test]
fn test_stray_byte_mid_word_is_ignored() {
    assert_eq!(normalize("ca\u{ff}t's").text, normalize("cat's").text);
    assert_eq!(normalize("it\u{ff}'s done.").text, "It is done.  ");
}

#[test]
fn test_exactly_one_break_for_long_unpunctuated_input() {
    let input = "word ".repeat(20);
    assert_eq!(input.len(), 100);

    let normalized = normalize(&input);
    assert_eq!(normalized.text.matches('\n').count(), 1);
    assert_eq!(normalized.stats.line_breaks, 1);

    // The 91st consumed character is the 'w' of the 19th word, still buffered
    let (before, after) = normalized.text.split_once('\n').unwrap();
    assert_eq!(before, format!("Word {}", "word ".repeat(17)));
    assert_eq!(after, "word word ");
}

#[test]
fn test_every_terminator_followed_by_two_spaces() {
    let out = normalize("one. two! three? four").text;
    for (i, ch) in out.char_indices() {
        if matches!(ch, '.' | '!' | '?') {
            assert_eq!(&out[i + 1..i + 3], "  ", "terminator at {i} in {out:?}");
        }
    }
    assert_eq!(out, "One.  Two!  Three?  Four");
}

#[test]
fn test_sentence_initial_words_capitalized() {
    let out = normalize("alpha beta. gamma delta! epsilon").text;
    assert_eq!(out, "Alpha beta.  Gamma delta!  Epsilon");
}

#[test]
fn test_output_is_deterministic() {
    let input = "we're here. you've GOT it?\nthere's   more\tto come";
    assert_eq!(normalize(input).text, normalize(input).text);
    assert_eq!(normalize(input).text, "We are here.  You have got it?  There is moreto come");
}

#[test]
fn test_correct_idempotent_over_table() {
    let table = CorrectionTable::default();
    for (key, _) in DEFAULT_CORRECTIONS {
        // Replacements are re-read word by word, as the scanner would see them
        for word in table.correct(key).split(' ') {
            assert_eq!(table.correct(word), word, "correct is not idempotent for {key:?}");
        }
    }
}

#[test]
fn test_custom_table_last_match_wins() {
    let table = CorrectionTable::new([("teh", "tea"), ("teh", "the")]);
    assert_eq!(normalize_with("teh cat. teh", &table).text, "The cat.  Teh");
}

#[test]
fn test_step_by_step_state_tracking() {
    let table = CorrectionTable::default();
    let mut scanner = Scanner::with_wrapper(&table, LineWrapper::default());
    assert_eq!(scanner.state(), ScanState::SentenceEnd);

    scanner.step('i');
    assert_eq!(scanner.state(), ScanState::Word);
    assert_eq!(scanner.current_word(), "I");

    scanner.step(' ');
    assert_eq!(scanner.state(), ScanState::Deadspace);
    assert_eq!(scanner.output(), "I ");

    scanner.step('.');
    assert_eq!(scanner.state(), ScanState::SentenceEnd);
    assert_eq!(scanner.output(), "I .  ");
}

#[test]
fn test_classify_public() {
    assert_eq!(classify('A'), CharClass::WordChar);
    assert_eq!(classify('?'), CharClass::Terminator);
    assert_eq!(classify('\n'), CharClass::Space);
    assert_eq!(classify('\u{e9}'), CharClass::Other);
}

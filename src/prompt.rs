// WHY: User interaction kept behind BufRead/Write so it can be driven from tests

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

pub const TRANSLATE_QUESTION: &str = "Do you want to translate the text into another language? ([Y]/n) : ";

pub const LANGUAGE_QUESTION: &str = "(!) You need to enter your language in its 2 letter form: \
ex. french -> fr, spanish -> es.\n\
See this link for more information: https://cloud.google.com/translate/docs/languages\n\
What language do you want to translate the text into? : ";

/// Interpret a yes/no answer; an empty line means yes
///
/// Only the first character counts, so leading whitespace declines.
pub fn is_yes(answer: &str) -> bool {
    match answer.chars().next() {
        None => true,
        Some(first) => first.eq_ignore_ascii_case(&'y'),
    }
}

/// Ask a question and read one answer line without its line ending
///
/// Returns `None` at end of input.
fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<Option<String>> {
    write!(output, "{question}").context("Failed to write prompt")?;
    output.flush().context("Failed to flush prompt")?;

    let mut line = String::new();
    if input.read_line(&mut line).context("Failed to read answer")? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Ask whether to translate and, if so, into which language
///
/// Returns `None` when the user declines or input ends before an answer.
pub fn prompt_translation<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Option<String>> {
    match ask(input, output, TRANSLATE_QUESTION)? {
        Some(answer) if is_yes(&answer) => {}
        _ => return Ok(None),
    }

    let language = ask(input, output, LANGUAGE_QUESTION)?;
    Ok(language.map(|language| language.trim().to_string()))
}

// WHY: End-to-end run: read, normalize, persist, then optionally translate and persist again
// Translation consumes a PersistedOutput, so it cannot begin before the normalized write completes

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::reader::{AsyncFileReader, ReaderConfig};
use crate::scanner::{plain::normalize_plain, rewrap_at_boundaries, CorrectionTable, LineWrapper, ScanStats, Scanner};
use crate::translation::{Translator, LANGUAGE_CODE_HINT};
use crate::writer::{replace_output, write_output, PersistedOutput};

/// Which automaton normalizes the text
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ScanMode {
    /// Word corrections and line wrapping
    #[default]
    Corrected,
    /// Base automaton: no corrections, no wrapping
    Plain,
}

/// Configuration for a single run
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub mode: ScanMode,
    /// Column limit for the scanner wrapper and for rewrapping translations
    pub wrap_column: usize,
    pub reader: ReaderConfig,
}

impl PipelineConfig {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            mode: ScanMode::default(),
            wrap_column: crate::scanner::DEFAULT_WRAP_COLUMN,
            reader: ReaderConfig::default(),
        }
    }
}

/// What happened to the optional translation step
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TranslationOutcome {
    Skipped,
    Translated { language: String, chars: u64 },
    Failed { language: String, error: String },
}

/// Statistics for one run, written to the stats file when requested
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RunStats {
    pub input: String,
    pub output: String,
    pub mode: ScanMode,
    pub bytes_read: u64,
    pub lossy_input: bool,
    pub scan: ScanStats,
    pub bytes_written: u64,
    pub translation: TranslationOutcome,
    pub duration_ms: u64,
}

/// Read the input, normalize it and persist the result
///
/// Input and output failures are fatal and returned as errors.
pub async fn normalize_file(config: &PipelineConfig) -> Result<(PersistedOutput, RunStats)> {
    let start_time = std::time::Instant::now();

    let reader = AsyncFileReader::new(config.reader.clone());
    let (text, read_stats) = reader.read_text(&config.input).await?;

    let (normalized, scan) = match config.mode {
        ScanMode::Corrected => {
            let table = CorrectionTable::default();
            let mut scanner = Scanner::with_wrapper(&table, LineWrapper::new(config.wrap_column));
            scanner.feed(&text);
            let normalized = scanner.finish();
            (normalized.text, normalized.stats)
        }
        ScanMode::Plain => normalize_plain(&text),
    };

    info!(
        mode = ?config.mode,
        chars = scan.chars_consumed,
        words = scan.words_emitted,
        corrected = scan.words_corrected,
        "Normalization complete"
    );

    let persisted = write_output(&config.output, &normalized).await?;

    let stats = RunStats {
        input: config.input.display().to_string(),
        output: config.output.display().to_string(),
        mode: config.mode,
        bytes_read: read_stats.bytes_read,
        lossy_input: read_stats.lossy,
        scan,
        bytes_written: persisted.bytes_written(),
        translation: TranslationOutcome::Skipped,
        duration_ms: start_time.elapsed().as_millis() as u64,
    };

    Ok((persisted, stats))
}

/// Translate persisted output in place
///
/// Failures are logged with a language-code hint and leave the persisted
/// normalized text untouched; they never propagate.
pub async fn translate_persisted<T: Translator>(
    persisted: PersistedOutput,
    language: &str,
    translator: &T,
    wrap_column: usize,
) -> TranslationOutcome {
    let failed = |error: anyhow::Error| {
        warn!(language, error = %format!("{error:#}"), "Translation failed; keeping normalized output");
        warn!("{}", LANGUAGE_CODE_HINT);
        TranslationOutcome::Failed {
            language: language.to_string(),
            error: format!("{error:#}"),
        }
    };

    let text = match persisted.read_back().await {
        Ok(text) => text,
        Err(e) => return failed(e),
    };

    info!(language, "Translating text");
    let translated = match translator.translate(language, &text).await {
        Ok(translated) if !translated.is_empty() => translated,
        Ok(_) => return failed(anyhow::anyhow!("Translation service returned empty text")),
        Err(e) => return failed(e),
    };

    let wrapped = rewrap_at_boundaries(&translated, wrap_column);
    match replace_output(&persisted, &wrapped).await {
        Ok(_) => TranslationOutcome::Translated {
            language: language.to_string(),
            chars: wrapped.chars().count() as u64,
        },
        Err(e) => failed(e),
    }
}

/// Run the whole pipeline with an already chosen target language
pub async fn run<T: Translator>(
    config: &PipelineConfig,
    language: Option<&str>,
    translator: &T,
) -> Result<RunStats> {
    let start_time = std::time::Instant::now();
    let (persisted, mut stats) = normalize_file(config).await?;

    if let Some(language) = language {
        stats.translation = translate_persisted(persisted, language, translator, config.wrap_column).await;
    }

    stats.duration_ms = start_time.elapsed().as_millis() as u64;
    Ok(stats)
}

/// Write run statistics as pretty JSON
pub async fn write_stats(path: &Path, stats: &RunStats) -> Result<()> {
    let content = serde_json::to_string_pretty(stats)?;
    write_output(path, &content).await?;
    Ok(())
}

pub mod scanner;
pub mod reader;
pub mod writer;
pub mod translation;
pub mod prompt;
pub mod pipeline;

// Re-export main types for convenient access
pub use scanner::{
    classify, normalize, normalize_with, transition,
    CharClass, CorrectionTable, LineWrapper, Normalized, ScanState, ScanStats, Scanner
};

// Re-export pipeline entry points
pub use pipeline::{
    normalize_file, run, translate_persisted, write_stats,
    PipelineConfig, RunStats, ScanMode, TranslationOutcome
};

pub use translation::{HttpTranslator, Translator, TranslatorConfig};
pub use writer::{replace_output, write_output, PersistedOutput};

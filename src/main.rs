use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use prosefix::pipeline::{self, PipelineConfig, ScanMode};
use prosefix::prompt::prompt_translation;
use prosefix::translation::{HttpTranslator, TranslatorConfig, DEFAULT_ENDPOINT};

#[derive(Parser, Debug)]
#[command(name = "prosefix")]
#[command(about = "Normalize English text with a DFA scanner, word corrections and line wrapping")]
#[command(version)]
struct Args {
    /// Text file to normalize
    input: PathBuf,

    /// Destination for the normalized (and optionally translated) text
    #[arg(short, long, default_value = "output.txt")]
    output: PathBuf,

    /// Use the base automaton without corrections or wrapping
    #[arg(long)]
    plain: bool,

    /// Translate into this 2-letter language code without prompting
    #[arg(long, value_name = "LANG", conflicts_with = "no_translate")]
    translate: Option<String>,

    /// Skip the translation prompt
    #[arg(long)]
    no_translate: bool,

    /// Translation service endpoint
    #[arg(long, env = "PROSEFIX_TRANSLATE_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// API key for the translation service
    #[arg(long, env = "PROSEFIX_TRANSLATE_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Column after which lines are wrapped
    #[arg(long, default_value_t = prosefix::scanner::DEFAULT_WRAP_COLUMN)]
    wrap_column: usize,

    /// Write run statistics as JSON to this path
    #[arg(long)]
    stats_out: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // WHY: logs go to stderr so prompts and summaries on stdout stay readable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_writer(io::stderr)
        .json()
        .init();

    let args = Args::parse();

    info!("Starting prosefix");
    info!(
        input = %args.input.display(),
        output = %args.output.display(),
        plain = args.plain,
        translate = ?args.translate,
        "Parsed CLI arguments"
    );

    if !args.input.is_file() {
        anyhow::bail!("Input file does not exist: {}", args.input.display());
    }

    let config = PipelineConfig {
        mode: if args.plain { ScanMode::Plain } else { ScanMode::Corrected },
        wrap_column: args.wrap_column,
        ..PipelineConfig::new(&args.input, &args.output)
    };

    let (persisted, mut stats) = pipeline::normalize_file(&config).await?;

    println!("prosefix v{} - normalization complete", env!("CARGO_PKG_VERSION"));
    println!("  Characters processed: {}", stats.scan.chars_consumed);
    println!("  Words corrected: {}", stats.scan.words_corrected);
    println!("  Output: {}", persisted.path().display());

    let language = if args.no_translate {
        None
    } else if let Some(language) = args.translate.clone() {
        Some(language)
    } else {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut stdout = io::stdout();
        prompt_translation(&mut input, &mut stdout)?
    };

    if let Some(language) = language {
        let translator = HttpTranslator::new(TranslatorConfig {
            endpoint: args.endpoint.clone(),
            api_key: args.api_key.clone(),
            ..Default::default()
        })?;

        println!("Translating text...");
        stats.translation =
            pipeline::translate_persisted(persisted, &language, &translator, config.wrap_column).await;

        match &stats.translation {
            pipeline::TranslationOutcome::Translated { .. } => println!("Translation complete!"),
            pipeline::TranslationOutcome::Failed { .. } => {
                println!("(!) There was an error.");
                println!("{}", prosefix::translation::LANGUAGE_CODE_HINT);
            }
            pipeline::TranslationOutcome::Skipped => {}
        }
    }

    if let Some(stats_out) = &args.stats_out {
        pipeline::write_stats(stats_out, &stats).await?;
        info!("Run statistics written to {}", stats_out.display());
    }

    Ok(())
}

use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, BufReader};
use tracing::{debug, info, warn};

/// Configuration for input reading behavior
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Buffer size for async reading (default: 8KB)
    pub buffer_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            buffer_size: 8192, // WHY: 8KB is optimal for most filesystems and network storage
        }
    }
}

/// Statistics for a single read
#[derive(Debug, Clone)]
pub struct ReadStats {
    pub file_path: String,
    pub bytes_read: u64,
    pub chars_decoded: u64,
    /// True when invalid UTF-8 sequences were replaced with U+FFFD
    pub lossy: bool,
    pub duration_ms: u64,
}

/// Async reader that loads a whole input file as text
pub struct AsyncFileReader {
    config: ReaderConfig,
}

impl AsyncFileReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Read a file into memory, decoding invalid UTF-8 lossily
    ///
    /// Undecodable bytes become U+FFFD, which the scanner classifies as Other
    /// and drops. Open and read failures are returned as errors.
    pub async fn read_text<P: AsRef<Path>>(&self, file_path: P) -> Result<(String, ReadStats)> {
        let path = file_path.as_ref();
        let start_time = std::time::Instant::now();

        debug!("Starting async read of file: {}", path.display());

        let file = File::open(path)
            .await
            .with_context(|| format!("Failed to open input file {}", path.display()))?;

        let mut reader = BufReader::with_capacity(self.config.buffer_size, file);
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .await
            .with_context(|| format!("Failed to read input file {}", path.display()))?;

        let bytes_read = bytes.len() as u64;
        let (text, lossy) = match String::from_utf8(bytes) {
            Ok(text) => (text, false),
            Err(err) => {
                warn!("Input {} is not valid UTF-8; undecodable bytes will be dropped", path.display());
                (String::from_utf8_lossy(err.as_bytes()).into_owned(), true)
            }
        };

        let stats = ReadStats {
            file_path: path.display().to_string(),
            bytes_read,
            chars_decoded: text.chars().count() as u64,
            lossy,
            duration_ms: start_time.elapsed().as_millis() as u64,
        };

        info!(
            "Successfully read {}: {} bytes, {} chars in {}ms",
            path.display(),
            stats.bytes_read,
            stats.chars_decoded,
            stats.duration_ms
        );

        Ok((text, stats))
    }
}

/// Convenience function for reading a single file with default configuration
pub async fn read_file_async<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let reader = AsyncFileReader::new(ReaderConfig::default());
    let (text, _stats) = reader.read_text(file_path).await?;
    Ok(text)
}

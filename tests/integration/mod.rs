// Integration test utilities and common code
// WHY: Centralized utilities avoid duplication across integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{anyhow, Result};
use prosefix::Translator;
use tempfile::TempDir;

/// Test fixture helper for creating temporary input/output files
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
}

impl TestFixture {
    /// Create a new test fixture with temporary directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root_path = temp_dir.path().to_path_buf();

        Self { temp_dir, root_path }
    }

    /// Create an input file with given content
    pub fn create_input_file<P: AsRef<Path>>(&self, relative_path: P, content: &[u8]) -> PathBuf {
        let file_path = self.root_path.join(relative_path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }

        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    /// Path for an output file inside the fixture
    pub fn output_path<P: AsRef<Path>>(&self, relative_path: P) -> PathBuf {
        self.root_path.join(relative_path)
    }

    /// Read a file from the fixture as text
    pub fn read<P: AsRef<Path>>(&self, path: P) -> String {
        fs::read_to_string(self.root_path.join(path)).expect("Failed to read fixture file")
    }
}

/// Translator stub recording what it was asked to translate
pub struct StubTranslator {
    reply: Result<String, String>,
    pub seen: Mutex<Vec<(String, String)>>,
}

impl StubTranslator {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.seen.lock().expect("stub lock poisoned").clone()
    }
}

impl Translator for StubTranslator {
    async fn translate(&self, language: &str, text: &str) -> Result<String> {
        self.seen
            .lock()
            .expect("stub lock poisoned")
            .push((language.to_string(), text.to_string()));
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(anyhow!("{message}")),
        }
    }
}

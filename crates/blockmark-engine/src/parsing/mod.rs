pub mod blocks;
pub mod indent;
pub mod lines;
pub mod snapshot;

use std::thread;

use serde::{Deserialize, Serialize};

use blocks::{BlockBuilder, BlockToken, classify_lines};
use lines::split_lines;

/// Tunables for [`Tokenizer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerOptions {
    /// Upper bound on classification workers. `0` means one per available CPU.
    pub max_threads: usize,
    /// Drop one trailing `\r` from every line before classification.
    pub strip_carriage_returns: bool,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self {
            max_threads: 0,
            strip_carriage_returns: true,
        }
    }
}

impl TokenizerOptions {
    /// Resolves `max_threads`, falling back to the available parallelism.
    pub fn worker_count(&self) -> usize {
        if self.max_threads > 0 {
            return self.max_threads;
        }
        thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
    }
}

/// Turns text into a sequence of resolved block tokens.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    options: TokenizerOptions,
}

impl Tokenizer {
    pub fn new(options: TokenizerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &TokenizerOptions {
        &self.options
    }

    pub fn tokenize(&self, text: &str) -> Vec<BlockToken> {
        let lines = split_lines(text, self.options.strip_carriage_returns);
        let classified = classify_lines(&lines, self.options.worker_count());

        let mut builder = BlockBuilder::new();
        for line in classified {
            builder.push(line);
        }
        let tokens = builder.finish();

        log::debug!("{} lines merged into {} tokens", lines.len(), tokens.len());
        tokens
    }
}

/// Tokenizes `text` with default options.
pub fn tokenize(text: &str) -> Vec<BlockToken> {
    Tokenizer::default().tokenize(text)
}

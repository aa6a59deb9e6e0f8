//! Configuration type definitions

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::thread::ThreadMode;

/// Name of the HTML/quote/signature cleanup transformer
pub const CONTENT_CLEANER: &str = "content_cleaner";
/// Name of the link extraction transformer
pub const LINK_EXTRACTOR: &str = "link_extractor";
/// Name of the thread grouping transformer
pub const THREAD_PROCESSOR: &str = "thread_processor";

/// What the pipeline does when a stage fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorStrategy {
    /// Abort and return the error
    #[default]
    FailFast,
    /// Log the failure and feed the stage's input to the next stage
    LogAndContinue,
    /// Log the failure and replace the batch with an empty one, so later
    /// stages run on nothing
    SkipItem,
}

impl ErrorStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorStrategy::FailFast => "fail_fast",
            ErrorStrategy::LogAndContinue => "log_and_continue",
            ErrorStrategy::SkipItem => "skip_item",
        }
    }
}

impl fmt::Display for ErrorStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pipeline configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipelineConfig {
    /// When false the batch passes through untouched
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Transformer names in execution order
    #[serde(default = "default_pipeline_order")]
    pub pipeline_order: Vec<String>,

    #[serde(default)]
    pub error_strategy: ErrorStrategy,

    /// Raw per-transformer options, keyed by transformer name
    #[serde(default)]
    pub transformers: BTreeMap<String, toml::Table>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            pipeline_order: default_pipeline_order(),
            error_strategy: ErrorStrategy::default(),
            transformers: BTreeMap::new(),
        }
    }
}

/// Options for the content cleaner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CleanerOptions {
    #[serde(default = "default_true")]
    pub html_to_markdown: bool,

    #[serde(default = "default_true")]
    pub strip_quoted_text: bool,

    #[serde(default = "default_true")]
    pub remove_extra_whitespace: bool,

    /// How close to the end a `--` separator must be to count as a signature
    #[serde(default = "default_signature_threshold")]
    pub signature_detection_threshold: usize,

    /// Move trailing signatures out of the content into metadata
    #[serde(default = "default_true")]
    pub extract_signatures: bool,

    /// Strip `Re:`/`Fwd:` prefixes from titles
    #[serde(default = "default_true")]
    pub clean_titles: bool,
}

impl Default for CleanerOptions {
    fn default() -> Self {
        Self {
            html_to_markdown: true,
            strip_quoted_text: true,
            remove_extra_whitespace: true,
            signature_detection_threshold: default_signature_threshold(),
            extract_signatures: true,
            clean_titles: true,
        }
    }
}

/// Options for the link extractor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LinkOptions {
    #[serde(default = "default_true")]
    pub extract_markdown_links: bool,

    #[serde(default = "default_true")]
    pub extract_plain_urls: bool,

    #[serde(default = "default_true")]
    pub deduplicate_links: bool,
}

impl Default for LinkOptions {
    fn default() -> Self {
        Self {
            extract_markdown_links: true,
            extract_plain_urls: true,
            deduplicate_links: true,
        }
    }
}

/// Options for the thread processor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThreadOptions {
    #[serde(default)]
    pub thread_mode: ThreadMode,

    /// Maximum number of messages rendered in summary mode
    #[serde(default = "default_summary_length")]
    pub thread_summary_length: usize,
}

impl Default for ThreadOptions {
    fn default() -> Self {
        Self {
            thread_mode: ThreadMode::default(),
            thread_summary_length: default_summary_length(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_pipeline_order() -> Vec<String> {
    vec![CONTENT_CLEANER.to_string(), LINK_EXTRACTOR.to_string()]
}

fn default_signature_threshold() -> usize {
    crate::text::DEFAULT_SIGNATURE_THRESHOLD
}

fn default_summary_length() -> usize {
    5
}

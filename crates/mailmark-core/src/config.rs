//! Pipeline configuration for mailmark
//!
//! The pipeline reads one TOML document:
//!
//! ```toml
//! enabled = true
//! pipeline_order = ["content_cleaner", "thread_processor", "link_extractor"]
//! error_strategy = "log_and_continue"
//!
//! [transformers.thread_processor]
//! thread_mode = "summary"
//! thread_summary_length = 4
//! ```
//!
//! Transformer option tables stay loosely typed here and are parsed into
//! their typed option structs once, when the pipeline is built.

pub mod types;

use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

use crate::bail_invalid;
use crate::error::{MailmarkError, Result};

pub use types::{
    CleanerOptions, ErrorStrategy, LinkOptions, PipelineConfig, ThreadOptions, CONTENT_CLEANER,
    LINK_EXTRACTOR, THREAD_PROCESSOR,
};

impl PipelineConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: PipelineConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Raw options for a transformer, if any were configured
    pub fn options_for(&self, transformer: &str) -> Option<&toml::Table> {
        self.transformers.get(transformer)
    }
}

/// Parse a transformer's raw option table into its typed options
pub fn parse_options<T: DeserializeOwned>(transformer: &str, options: &toml::Table) -> Result<T> {
    toml::Value::Table(options.clone())
        .try_into()
        .map_err(|e: toml::de::Error| MailmarkError::invalid_config(transformer, e.message()))
}

impl ThreadOptions {
    /// Reject option combinations serde cannot express
    pub fn validate(&self) -> Result<()> {
        if self.thread_summary_length == 0 {
            bail_invalid!("thread_summary_length", "must be greater than zero");
        }
        Ok(())
    }
}

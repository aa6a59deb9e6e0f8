//! `mailmark transform`

use std::path::Path;

use mailmark_core::config::PipelineConfig;
use mailmark_core::error::{MailmarkError, Result};
use mailmark_core::item::{Batch, Item};
use mailmark_core::pipeline::Pipeline;
use tracing::{debug, warn};

use super::io::{read_input, write_output};

pub fn execute(
    config: Option<&Path>,
    input: Option<&Path>,
    output: Option<&Path>,
    pretty: bool,
) -> Result<()> {
    let config = match config {
        Some(path) => PipelineConfig::load(path)?,
        None => PipelineConfig::default(),
    };
    let pipeline = Pipeline::from_config(&config)?;

    let batch = parse_batch(&read_input(input)?)?;
    debug!(items = batch.len(), stages = ?pipeline.names(), "transforming batch");
    let transformed = pipeline.transform(&batch)?;

    let items: Vec<&Item> = transformed.iter().map(|item| item.as_ref()).collect();
    let json = if pretty {
        serde_json::to_string_pretty(&items)?
    } else {
        serde_json::to_string(&items)?
    };
    write_output(output, &json)
}

/// Parse a JSON array of items, dropping `null` entries
fn parse_batch(raw: &str) -> Result<Batch> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    if !value.is_array() {
        return Err(MailmarkError::InvalidInput(
            "expected a JSON array of items".to_string(),
        ));
    }

    let entries: Vec<Option<Item>> = serde_json::from_value(value)?;
    let total = entries.len();
    let batch: Batch = entries
        .into_iter()
        .flatten()
        .map(Item::into_shared)
        .collect();

    if batch.len() < total {
        warn!(skipped = total - batch.len(), "skipped null items in input");
    }
    Ok(batch)
}

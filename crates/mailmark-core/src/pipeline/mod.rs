//! Pipeline orchestration
//!
//! A [`Pipeline`] is built once from a [`PipelineConfig`]: every name in
//! `pipeline_order` is looked up in a [`TransformerRegistry`] and configured
//! with its option table, so configuration errors surface before any item is
//! touched. [`Pipeline::transform`] then runs the stages in order and applies
//! the configured [`ErrorStrategy`] when one fails or panics.

mod registry;
mod transformer;
pub mod transformers;

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, instrument, warn};

use crate::config::{ErrorStrategy, PipelineConfig};
use crate::error::{MailmarkError, Result};
use crate::item::{Batch, Item};

pub use registry::{TransformerFactory, TransformerKind, TransformerRegistry};
pub use transformer::{Transformer, TransformerOptions};

/// Configured, ordered list of transformers
pub struct Pipeline {
    enabled: bool,
    strategy: ErrorStrategy,
    stages: Vec<Box<dyn Transformer>>,
}

impl Pipeline {
    /// Build a pipeline from configuration using the built-in transformers
    pub fn from_config(config: &PipelineConfig) -> Result<Self> {
        Self::with_registry(config, &TransformerRegistry::new())
    }

    /// Build a pipeline, resolving transformer names through `registry`
    pub fn with_registry(config: &PipelineConfig, registry: &TransformerRegistry) -> Result<Self> {
        let no_options = TransformerOptions::new();
        let mut stages = Vec::with_capacity(config.pipeline_order.len());

        for name in &config.pipeline_order {
            let mut stage = registry.create(name)?;
            stage.configure(config.options_for(name).unwrap_or(&no_options))?;
            stages.push(stage);
        }

        for name in config.transformers.keys() {
            if !config.pipeline_order.contains(name) {
                warn!(transformer = %name, "options given for a transformer that is not in pipeline_order");
            }
        }

        debug!(
            stages = stages.len(),
            strategy = %config.error_strategy,
            enabled = config.enabled,
            "pipeline configured"
        );

        Ok(Self {
            enabled: config.enabled,
            strategy: config.error_strategy,
            stages,
        })
    }

    /// Stage names in execution order
    pub fn names(&self) -> Vec<&str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    pub fn error_strategy(&self) -> ErrorStrategy {
        self.strategy
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Run every stage over the batch, each stage seeing the previous one's output
    #[instrument(skip_all, fields(items = items.len(), stages = self.stages.len(), strategy = %self.strategy))]
    pub fn transform(&self, items: &[Arc<Item>]) -> Result<Batch> {
        if !self.enabled {
            debug!("pipeline disabled, passing batch through");
            return Ok(items.to_vec());
        }

        let mut batch: Batch = items.to_vec();
        for stage in &self.stages {
            let name = stage.name();
            let start = Instant::now();
            debug!(stage = name, input = batch.len(), "stage started");

            match run_stage(stage.as_ref(), &batch) {
                Ok(output) => {
                    crate::trace_time!(start, "stage_elapsed", stage = name);
                    debug!(stage = name, output = output.len(), "stage finished");
                    batch = output;
                }
                Err(err) => batch = self.recover(name, err, batch)?,
            }
        }
        Ok(batch)
    }

    /// Apply the error strategy to a failed stage
    fn recover(&self, stage: &str, err: MailmarkError, input: Batch) -> Result<Batch> {
        match self.strategy {
            ErrorStrategy::FailFast => Err(err),
            ErrorStrategy::LogAndContinue => {
                warn!(stage, error = %err, strategy = %self.strategy, "stage failed, keeping its input");
                Ok(input)
            }
            ErrorStrategy::SkipItem => {
                warn!(stage, error = %err, strategy = %self.strategy, dropped = input.len(), "stage failed, dropping batch");
                Ok(Vec::new())
            }
        }
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("enabled", &self.enabled)
            .field("strategy", &self.strategy)
            .field("stages", &self.names())
            .finish()
    }
}

/// Run one stage, turning panics and unattributed errors into stage errors
fn run_stage(stage: &dyn Transformer, items: &[Arc<Item>]) -> Result<Batch> {
    let name = stage.name();
    match panic::catch_unwind(AssertUnwindSafe(|| stage.transform(items))) {
        Ok(Ok(batch)) => Ok(batch),
        Ok(Err(err)) if err.transformer().is_some() => Err(err),
        Ok(Err(err)) => Err(MailmarkError::transform_failed(name, err)),
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            warn!(stage = name, panic = %message, "recovered from transformer panic");
            Err(MailmarkError::TransformerPanicked {
                transformer: name.to_string(),
                message,
            })
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

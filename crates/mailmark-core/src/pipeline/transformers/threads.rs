use std::sync::Arc;

use crate::config::{parse_options, ThreadOptions, THREAD_PROCESSOR};
use crate::error::{MailmarkError, Result};
use crate::item::{Batch, Item};
use crate::pipeline::{Transformer, TransformerOptions};
use crate::thread::ThreadProcessor;

/// Pipeline stage around [`ThreadProcessor`]
#[derive(Debug, Clone, Default)]
pub struct ThreadTransformer {
    processor: ThreadProcessor,
}

impl ThreadTransformer {
    pub fn processor(&self) -> &ThreadProcessor {
        &self.processor
    }
}

impl Transformer for ThreadTransformer {
    fn name(&self) -> &str {
        THREAD_PROCESSOR
    }

    fn configure(&mut self, options: &TransformerOptions) -> Result<()> {
        let options: ThreadOptions = parse_options(THREAD_PROCESSOR, options)?;
        options
            .validate()
            .map_err(|e| MailmarkError::invalid_config(THREAD_PROCESSOR, e))?;
        self.processor = ThreadProcessor::new(options);
        Ok(())
    }

    fn transform(&self, items: &[Arc<Item>]) -> Result<Batch> {
        Ok(self.processor.process_threads(items))
    }
}

//! Result Processors
//! 
//! Post-execution enrichment steps. Each processor receives the request's
//! result exclusively and writes only the fields it owns.

pub mod dimension_recommend;

pub use dimension_recommend::*;

use crate::execution::context::ExecuteContext;
use crate::execution::result::QueryResult;
use std::sync::Arc;
use tracing::debug;

/// Enrichment step run once per completed query
pub trait ExecuteResultProcessor: Send + Sync {
    /// Processor name (e.g., "dimension_recommend")
    fn name(&self) -> &'static str;

    /// Enrich `result` in place, or leave it untouched when not applicable
    fn process(&self, context: &ExecuteContext, result: &mut QueryResult);
}

/// Ordered set of result processors, run in registration order
#[derive(Default)]
pub struct ProcessorChain {
    processors: Vec<Arc<dyn ExecuteResultProcessor>>,
}

impl ProcessorChain {
    pub fn register(&mut self, processor: Arc<dyn ExecuteResultProcessor>) {
        self.processors.push(processor);
    }

    pub fn processor_names(&self) -> Vec<&'static str> {
        self.processors.iter().map(|p| p.name()).collect()
    }

    pub fn process(&self, context: &ExecuteContext, result: &mut QueryResult) {
        for processor in &self.processors {
            debug!(
                "Running result processor {} for query {}",
                processor.name(),
                context.query_id
            );
            processor.process(context, result);
        }
    }
}

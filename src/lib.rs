pub mod config;
pub mod error;
pub mod execution;
pub mod processor;
pub mod semantic;

pub use config::RecommendConfig;
pub use error::{RecommendError, Result};
pub use execution::{ExecuteContext, QueryResult, QueryType, SemanticParseInfo};
pub use processor::{
    DimensionRecommendProcessor, DimensionRecommender, ExecuteResultProcessor, ProcessorChain,
};
pub use semantic::{
    DataSetSchema, InMemorySchemaProvider, RelatedSchemaElement, SchemaElement, SchemaProvider,
};

//! Execute Context - What the parser understood about a query
//! 
//! Result processors only read from the context; it is shared by every
//! processor in the chain.

use crate::semantic::element::SchemaElement;
use serde::{Deserialize, Serialize};

/// Query classification produced by the semantic parser
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryType {
    /// Metric aggregation (e.g. "GMV by city last week")
    Aggregate,
    /// Row-level detail listing
    Detail,
    /// Lookup of a single entity by id
    Id,
    #[default]
    Unknown,
}

/// Parse metadata for one query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticParseInfo {
    pub id: i64,
    pub query_type: QueryType,
    pub data_set_id: i64,
    /// Metrics in the order the parser linked them
    #[serde(default)]
    pub metrics: Vec<SchemaElement>,
    #[serde(default)]
    pub dimensions: Vec<SchemaElement>,
}

impl SemanticParseInfo {
    pub fn new(query_type: QueryType, data_set_id: i64) -> Self {
        Self {
            query_type,
            data_set_id,
            ..Default::default()
        }
    }

    pub fn with_metrics(mut self, metrics: Vec<SchemaElement>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn first_metric(&self) -> Option<&SchemaElement> {
        self.metrics.first()
    }
}

/// Context passed to result processors
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecuteContext {
    pub query_id: i64,
    pub query_text: String,
    pub parse_info: SemanticParseInfo,
}

impl ExecuteContext {
    pub fn new(parse_info: SemanticParseInfo) -> Self {
        Self {
            parse_info,
            ..Default::default()
        }
    }

    pub fn with_query(mut self, query_id: i64, query_text: impl Into<String>) -> Self {
        self.query_id = query_id;
        self.query_text = query_text.into();
        self
    }
}

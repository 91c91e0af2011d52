//! Dataset Schema
//! 
//! Snapshot of the metrics and dimensions belonging to one dataset.

use crate::error::{RecommendError, Result};
use crate::semantic::element::SchemaElement;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSetSchema {
    pub data_set_id: i64,
    #[serde(default)]
    pub data_set_name: String,
    #[serde(default, deserialize_with = "skip_null_elements")]
    pub metrics: Vec<SchemaElement>,
    #[serde(default, deserialize_with = "skip_null_elements")]
    pub dimensions: Vec<SchemaElement>,
}

impl DataSetSchema {
    pub fn new(data_set_id: i64, data_set_name: impl Into<String>) -> Self {
        Self {
            data_set_id,
            data_set_name: data_set_name.into(),
            metrics: Vec::new(),
            dimensions: Vec::new(),
        }
    }

    pub fn with_metrics(mut self, metrics: Vec<SchemaElement>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn with_dimensions(mut self, dimensions: Vec<SchemaElement>) -> Self {
        self.dimensions = dimensions;
        self
    }

    pub fn metric(&self, id: i64) -> Option<&SchemaElement> {
        self.metrics.iter().find(|m| m.id == id)
    }

    pub fn dimension(&self, id: i64) -> Option<&SchemaElement> {
        self.dimensions.iter().find(|d| d.id == id)
    }

    /// Check that element ids are unique within the metric and dimension sets
    pub fn validate(&self) -> Result<()> {
        ensure_unique_ids(self.data_set_id, "metric", &self.metrics)?;
        ensure_unique_ids(self.data_set_id, "dimension", &self.dimensions)
    }
}

fn ensure_unique_ids(data_set_id: i64, kind: &str, elements: &[SchemaElement]) -> Result<()> {
    let mut seen = HashSet::with_capacity(elements.len());
    for element in elements {
        if !seen.insert(element.id) {
            return Err(RecommendError::Schema(format!(
                "Duplicate {} id {} in data set {}",
                kind, element.id, data_set_id
            )));
        }
    }
    Ok(())
}

/// Metadata exports may contain `null` slots; they never reach the selector.
fn skip_null_elements<'de, D>(deserializer: D) -> std::result::Result<Vec<SchemaElement>, D::Error>
where
    D: Deserializer<'de>,
{
    let elements: Option<Vec<Option<SchemaElement>>> = Option::deserialize(deserializer)?;
    Ok(elements.unwrap_or_default().into_iter().flatten().collect())
}

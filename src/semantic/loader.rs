//! Schema Catalog Loader
//! 
//! Loads dataset schemas from JSON exports of the metadata store.

use crate::error::{RecommendError, Result};
use crate::semantic::registry::InMemorySchemaProvider;
use crate::semantic::schema::DataSetSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Schema catalog JSON structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaCatalogJson {
    pub data_sets: Vec<DataSetSchema>,
}

/// Load a schema provider from JSON
pub fn load_from_json(json_str: &str) -> Result<InMemorySchemaProvider> {
    let catalog: SchemaCatalogJson = serde_json::from_str(json_str)?;

    let provider = InMemorySchemaProvider::new();
    for schema in catalog.data_sets {
        schema.validate()?;
        let data_set_id = schema.data_set_id;
        if provider.register(schema).is_some() {
            return Err(RecommendError::Schema(format!(
                "Data set {} is defined more than once",
                data_set_id
            )));
        }
    }

    info!("Loaded {} data set schemas", provider.len());
    Ok(provider)
}

/// Load a schema provider from file
pub fn load_from_file(path: impl AsRef<Path>) -> Result<InMemorySchemaProvider> {
    let contents = std::fs::read_to_string(path.as_ref())?;
    load_from_json(&contents)
}

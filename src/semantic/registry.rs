//! Schema Provider
//! 
//! Read side of the metadata store: resolves a dataset id to its schema.

use crate::semantic::schema::DataSetSchema;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;

/// Source of dataset schemas. Implementations own their caching and thread-safety.
pub trait SchemaProvider: Send + Sync {
    fn get_data_set_schema(&self, data_set_id: i64) -> Option<Arc<DataSetSchema>>;
}

/// In-memory schema provider
pub struct InMemorySchemaProvider {
    schemas: DashMap<i64, Arc<DataSetSchema>>,
}

impl InMemorySchemaProvider {
    pub fn new() -> Self {
        Self {
            schemas: DashMap::new(),
        }
    }

    /// Register a schema, replacing and returning any previous one for the same dataset
    pub fn register(&self, schema: DataSetSchema) -> Option<Arc<DataSetSchema>> {
        debug!(
            "Registering schema for data set {} ({} metrics, {} dimensions)",
            schema.data_set_id,
            schema.metrics.len(),
            schema.dimensions.len()
        );
        self.schemas.insert(schema.data_set_id, Arc::new(schema))
    }

    pub fn remove(&self, data_set_id: i64) -> Option<Arc<DataSetSchema>> {
        self.schemas.remove(&data_set_id).map(|(_, schema)| schema)
    }

    pub fn contains(&self, data_set_id: i64) -> bool {
        self.schemas.contains_key(&data_set_id)
    }

    pub fn list_data_sets(&self) -> Vec<i64> {
        let mut ids: Vec<i64> = self.schemas.iter().map(|entry| *entry.key()).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

impl Default for InMemorySchemaProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaProvider for InMemorySchemaProvider {
    fn get_data_set_schema(&self, data_set_id: i64) -> Option<Arc<DataSetSchema>> {
        self.schemas
            .get(&data_set_id)
            .map(|entry| Arc::clone(entry.value()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::semantic::element::SchemaElement;

    #[test]
    fn test_provider_operations() {
        let provider = InMemorySchemaProvider::new();
        assert!(provider.is_empty());

        provider.register(
            DataSetSchema::new(2, "visits")
                .with_dimensions(vec![SchemaElement::dimension(20, "page")]),
        );
        provider.register(DataSetSchema::new(1, "sales"));

        assert_eq!(provider.list_data_sets(), vec![1, 2]);
        assert!(provider.get_data_set_schema(3).is_none());

        let visits = provider.get_data_set_schema(2).unwrap();
        assert_eq!(visits.dimensions.len(), 1);

        let replaced = provider.register(DataSetSchema::new(2, "visits_v2"));
        assert_eq!(replaced.unwrap().data_set_name, "visits");
        assert_eq!(provider.get_data_set_schema(2).unwrap().data_set_name, "visits_v2");

        assert!(provider.remove(1).is_some());
        assert!(!provider.contains(1));
        assert_eq!(provider.len(), 1);
    }
}

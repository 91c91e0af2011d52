//! Schema Element Definition
//! 
//! A schema element is any named member of a dataset schema: metrics,
//! dimensions and the other element kinds the semantic layer tracks.

use serde::{Deserialize, Serialize};

/// Kind of schema element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaElementType {
    DataSet,
    Metric,
    Dimension,
    Value,
    Entity,
    Id,
    Date,
    Tag,
    Term,
}

/// Link from a metric to a dimension it can be broken down by
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedSchemaElement {
    pub dimension_id: i64,
    /// Whether the breakdown is mandatory for the metric
    #[serde(default)]
    pub is_necessary: bool,
}

impl RelatedSchemaElement {
    pub fn new(dimension_id: i64) -> Self {
        Self {
            dimension_id,
            is_necessary: false,
        }
    }

    pub fn necessary(mut self) -> Self {
        self.is_necessary = true;
        self
    }
}

/// Metric or dimension as seen by the semantic layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaElement {
    pub id: i64,
    #[serde(default)]
    pub data_set_id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub biz_name: String,
    #[serde(rename = "type")]
    pub element_type: SchemaElementType,
    /// Usage count; `None` means usage was never recorded, which is not the same as zero
    #[serde(default)]
    pub use_cnt: Option<u64>,
    /// Drill-down dimensions, only meaningful for metrics
    #[serde(default)]
    pub related_schema_elements: Vec<RelatedSchemaElement>,
    #[serde(default)]
    pub alias: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl SchemaElement {
    pub fn new(id: i64, name: impl Into<String>, element_type: SchemaElementType) -> Self {
        Self {
            id,
            data_set_id: 0,
            name: name.into(),
            biz_name: String::new(),
            element_type,
            use_cnt: None,
            related_schema_elements: Vec::new(),
            alias: Vec::new(),
            description: None,
        }
    }

    pub fn metric(id: i64, name: impl Into<String>) -> Self {
        Self::new(id, name, SchemaElementType::Metric)
    }

    pub fn dimension(id: i64, name: impl Into<String>) -> Self {
        Self::new(id, name, SchemaElementType::Dimension)
    }

    pub fn with_use_cnt(mut self, use_cnt: u64) -> Self {
        self.use_cnt = Some(use_cnt);
        self
    }

    pub fn with_related_schema_elements(mut self, related: Vec<RelatedSchemaElement>) -> Self {
        self.related_schema_elements = related;
        self
    }

    /// Shorthand for linking plain (non-mandatory) drill-down dimensions
    pub fn with_related_dimensions(self, dimension_ids: impl IntoIterator<Item = i64>) -> Self {
        let related = dimension_ids
            .into_iter()
            .map(RelatedSchemaElement::new)
            .collect();
        self.with_related_schema_elements(related)
    }

    pub fn has_related_schema_elements(&self) -> bool {
        !self.related_schema_elements.is_empty()
    }

    pub fn related_dimension_ids(&self) -> impl Iterator<Item = i64> + '_ {
        self.related_schema_elements.iter().map(|r| r.dimension_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_use_cnt_is_not_zero() {
        let json = r#"{"id": 7, "name": "city", "type": "dimension"}"#;
        let element: SchemaElement = serde_json::from_str(json).unwrap();

        assert_eq!(element.element_type, SchemaElementType::Dimension);
        assert_eq!(element.use_cnt, None);
        assert!(!element.has_related_schema_elements());

        let zero: SchemaElement =
            serde_json::from_str(r#"{"id": 7, "type": "dimension", "use_cnt": 0}"#).unwrap();
        assert_eq!(zero.use_cnt, Some(0));
    }

    #[test]
    fn test_related_dimension_ids() {
        let metric = SchemaElement::metric(1, "pv").with_related_schema_elements(vec![
            RelatedSchemaElement::new(10).necessary(),
            RelatedSchemaElement::new(11),
        ]);

        assert!(metric.has_related_schema_elements());
        assert_eq!(metric.related_dimension_ids().collect::<Vec<_>>(), vec![10, 11]);
        assert!(metric.related_schema_elements[0].is_necessary);
    }
}

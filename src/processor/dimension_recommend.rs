//! Dimension Recommendation
//! 
//! After an aggregate query, suggests up to `max_recommendations` dimensions
//! the user can break the first metric down by. Metrics with configured
//! drill-down dimensions get those; otherwise the most used dimensions of the
//! data set are suggested.
//! 
//! Missing data never fails the query: an unknown data set yields no
//! recommendations and an unknown metric falls back to usage ranking.

use crate::config::RecommendConfig;
use crate::execution::context::{ExecuteContext, QueryType};
use crate::execution::result::QueryResult;
use crate::processor::ExecuteResultProcessor;
use crate::semantic::element::SchemaElement;
use crate::semantic::registry::SchemaProvider;
use crate::semantic::schema::DataSetSchema;
use itertools::Itertools;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

/// Selects recommended dimensions for a metric
pub struct DimensionRecommender {
    provider: Arc<dyn SchemaProvider>,
    config: RecommendConfig,
}

impl DimensionRecommender {
    pub fn new(provider: Arc<dyn SchemaProvider>) -> Self {
        Self::with_config(provider, RecommendConfig::default())
    }

    pub fn with_config(provider: Arc<dyn SchemaProvider>, config: RecommendConfig) -> Self {
        Self { provider, config }
    }

    /// Rank the data set's dimensions for `metric_id`.
    /// 
    /// Highest usage count first. Equal counts keep schema order, and
    /// drill-down dimensions without a count go last.
    pub fn select(&self, metric_id: i64, data_set_id: i64) -> Vec<SchemaElement> {
        let Some(schema) = self.provider.get_data_set_schema(data_set_id) else {
            debug!("No schema for data set {}, nothing to recommend", data_set_id);
            return Vec::new();
        };

        let drill_down = drill_down_dimensions(&schema, metric_id);
        if drill_down.is_empty() {
            debug!(
                "Metric {} has no drill-down dimensions in data set {}, ranking by usage",
                metric_id, data_set_id
            );
        }

        let recommended: Vec<SchemaElement> = schema
            .dimensions
            .iter()
            .filter(|dimension| is_candidate(&drill_down, dimension))
            .sorted_by(|a, b| b.use_cnt.cmp(&a.use_cnt))
            .take(self.config.max_recommendations)
            .cloned()
            .collect();

        debug!(
            "Recommending {} dimensions for metric {} in data set {}",
            recommended.len(),
            metric_id,
            data_set_id
        );
        recommended
    }
}

/// Dimension ids linked to the metric, empty if the metric is unknown or has none
fn drill_down_dimensions(schema: &DataSetSchema, metric_id: i64) -> HashSet<i64> {
    schema
        .metrics
        .iter()
        .find(|metric| metric.id == metric_id && metric.has_related_schema_elements())
        .map(|metric| metric.related_dimension_ids().collect())
        .unwrap_or_default()
}

fn is_candidate(drill_down: &HashSet<i64>, dimension: &SchemaElement) -> bool {
    if !drill_down.is_empty() {
        return drill_down.contains(&dimension.id);
    }
    dimension.use_cnt.is_some()
}

/// Result processor attaching recommended dimensions to aggregate queries
pub struct DimensionRecommendProcessor {
    recommender: DimensionRecommender,
}

impl DimensionRecommendProcessor {
    pub fn new(recommender: DimensionRecommender) -> Self {
        Self { recommender }
    }
}

impl ExecuteResultProcessor for DimensionRecommendProcessor {
    fn name(&self) -> &'static str {
        "dimension_recommend"
    }

    fn process(&self, context: &ExecuteContext, result: &mut QueryResult) {
        let parse_info = &context.parse_info;
        if parse_info.query_type != QueryType::Aggregate {
            debug!(
                "Query {} type {:?} not aggregate, skipping dimension recommendation",
                context.query_id, parse_info.query_type
            );
            return;
        }
        let Some(metric) = parse_info.first_metric() else {
            debug!(
                "Query {} references no metrics, skipping dimension recommendation",
                context.query_id
            );
            return;
        };
        result.recommended_dimensions =
            self.recommender.select(metric.id, parse_info.data_set_id);
    }
}

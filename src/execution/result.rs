//! Query Result - What the chat layer returns for an executed query

use crate::semantic::element::SchemaElement;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryState {
    #[default]
    Success,
    SearchException,
    Empty,
    Invalid,
}

/// Result of one executed query, enriched in place by result processors
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    pub query_id: Option<i64>,
    
    pub query_state: QueryState,
    
    /// SQL that was executed, if any
    pub query_sql: Option<String>,
    
    /// Column names
    pub query_columns: Vec<String>,
    
    /// Result rows as JSON objects keyed by column
    pub query_results: Vec<serde_json::Value>,
    
    /// Natural-language rendering of the result
    pub text_result: Option<String>,
    
    /// Drill-down suggestions, written by the dimension recommend processor
    pub recommended_dimensions: Vec<SchemaElement>,
    
    /// Errors (if any)
    pub errors: Vec<String>,
}

impl QueryResult {
    /// Create a successful result
    pub fn success(query_columns: Vec<String>, query_results: Vec<serde_json::Value>) -> Self {
        let query_state = if query_results.is_empty() {
            QueryState::Empty
        } else {
            QueryState::Success
        };
        Self {
            query_state,
            query_columns,
            query_results,
            ..Default::default()
        }
    }
    
    /// Create an error result
    pub fn error(error: String) -> Self {
        Self {
            query_state: QueryState::SearchException,
            errors: vec![error],
            ..Default::default()
        }
    }
    
    pub fn with_query_id(mut self, query_id: i64) -> Self {
        self.query_id = Some(query_id);
        self
    }
    
    pub fn row_count(&self) -> usize {
        self.query_results.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_state_follows_rows() {
        let result = QueryResult::success(
            vec!["city".to_string(), "gmv".to_string()],
            vec![json!({"city": "Shenzhen", "gmv": 120.5})],
        );
        assert_eq!(result.query_state, QueryState::Success);
        assert_eq!(result.row_count(), 1);
        assert!(result.recommended_dimensions.is_empty());

        let empty = QueryResult::success(vec!["gmv".to_string()], Vec::new());
        assert_eq!(empty.query_state, QueryState::Empty);
    }

    #[test]
    fn test_error_result() {
        let result = QueryResult::error("timeout".to_string()).with_query_id(9);
        assert_eq!(result.query_state, QueryState::SearchException);
        assert_eq!(result.errors, vec!["timeout"]);
        assert_eq!(result.query_id, Some(9));
    }
}

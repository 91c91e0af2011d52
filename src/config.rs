//! Recommendation Configuration
//! 
//! The recommendation size limit is a fixed constant; deployments may
//! override it through the environment.

use crate::error::{RecommendError, Result};
use serde::{Deserialize, Serialize};

/// Default number of dimensions attached to a query result
pub const RECOMMEND_DIMENSION_SIZE: usize = 5;

/// Environment variable overriding [`RECOMMEND_DIMENSION_SIZE`]
pub const RECOMMEND_DIMENSION_SIZE_ENV: &str = "RECOMMEND_DIMENSION_SIZE";

/// Recommendation configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendConfig {
    /// Maximum dimensions to recommend (default: 5)
    pub max_recommendations: usize,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            max_recommendations: RECOMMEND_DIMENSION_SIZE,
        }
    }
}

impl RecommendConfig {
    /// Create with a custom limit. A zero limit is rejected.
    pub fn new(max_recommendations: usize) -> Result<Self> {
        if max_recommendations == 0 {
            return Err(RecommendError::Config(
                "max_recommendations must be greater than zero".to_string(),
            ));
        }
        Ok(Self { max_recommendations })
    }
    
    /// Load from `.env` / process environment, falling back to the default
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        match std::env::var(RECOMMEND_DIMENSION_SIZE_ENV) {
            Ok(raw) => Self::parse_limit(&raw),
            Err(_) => Ok(Self::default()),
        }
    }
    
    fn parse_limit(raw: &str) -> Result<Self> {
        let limit = raw.trim().parse::<usize>().map_err(|e| {
            RecommendError::Config(format!(
                "Invalid {} value '{}': {}",
                RECOMMEND_DIMENSION_SIZE_ENV, raw, e
            ))
        })?;
        Self::new(limit)
    }
}

use dimension_recommender::config::RecommendConfig;
use dimension_recommender::execution::{ExecuteContext, QueryResult, QueryType, SemanticParseInfo};
use dimension_recommender::processor::{
    DimensionRecommendProcessor, DimensionRecommender, ProcessorChain,
};
use dimension_recommender::semantic::{load_from_file, SchemaElement};

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "recommend")]
#[command(about = "Recommend drill-down dimensions for a metric of an aggregate query")]
#[command(version)]
struct Args {
    /// Path to the schema catalog JSON (default: ./schemas.json)
    #[arg(short, long, default_value = "schemas.json")]
    schemas: PathBuf,
    
    /// Data set the query ran against
    #[arg(short, long)]
    data_set: i64,
    
    /// Metric to recommend dimensions for
    #[arg(short, long)]
    metric: i64,
    
    /// Maximum dimensions to recommend (or set RECOMMEND_DIMENSION_SIZE)
    #[arg(short, long)]
    limit: Option<usize>,
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    
    let args = Args::parse();
    
    let config = match args.limit {
        Some(limit) => RecommendConfig::new(limit)?,
        None => RecommendConfig::from_env()?,
    };
    
    let provider = Arc::new(load_from_file(&args.schemas)?);
    info!("Loaded schemas from {}", args.schemas.display());
    
    let recommender = DimensionRecommender::with_config(provider, config);
    let mut chain = ProcessorChain::default();
    chain.register(Arc::new(DimensionRecommendProcessor::new(recommender)));
    
    let parse_info = SemanticParseInfo::new(QueryType::Aggregate, args.data_set)
        .with_metrics(vec![SchemaElement::metric(args.metric, "")]);
    let context = ExecuteContext::new(parse_info);
    let mut result = QueryResult::default();
    chain.process(&context, &mut result);
    
    info!(
        "Recommended {} dimensions for metric {} in data set {}",
        result.recommended_dimensions.len(),
        args.metric,
        args.data_set
    );
    println!("{}", serde_json::to_string_pretty(&result.recommended_dimensions)?);
    
    Ok(())
}

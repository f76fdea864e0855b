//! Georesolve CLI entrypoint.
//!
//! Reads an annotated TSV dataset, resolves every toponym against GeoNames,
//! writes the enriched table, and prints the agreement metrics.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use mimalloc::MiMalloc;

use georesolve::bias::CountryBiasBuilder;
use georesolve::config::Config;
use georesolve::gazetteer::GeoNamesClient;
use georesolve::pipeline::ArticleProcessor;
use georesolve::resolver::Resolver;
use georesolve::scoring::AgreementReport;
use georesolve::{dataset, UNRESOLVED};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser, Debug)]
#[command(name = "georesolve")]
#[command(about = "Resolve toponym annotations to GeoNames identifiers and score the result")]
struct Args {
    /// Annotated dataset in TSV format
    #[arg(long, default_value = "devset.tsv")]
    dataset: PathBuf,

    /// Resolve every toponym with the plain unbiased query
    #[arg(long)]
    baseline: bool,

    /// GeoNames account username (overrides GEORESOLVE_USERNAME)
    #[arg(long)]
    username: Option<String>,

    /// Where to write the enriched dataset
    #[arg(long, default_value = "output.tsv")]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut config = Config::from_env()?;
    if let Some(username) = args.username {
        config.username = username;
    }
    config.validate()?;

    let annotations = dataset::read_tsv(&args.dataset)?;
    tracing::info!(
        dataset = %args.dataset.display(),
        annotations = annotations.len(),
        baseline = args.baseline,
        "starting resolution run"
    );

    let client = Arc::new(GeoNamesClient::new(&config)?);
    let resolver = Arc::new(Resolver::new(client, config.search_language.clone()));
    let processor = ArticleProcessor::new(
        Arc::clone(&resolver),
        CountryBiasBuilder::new(config.default_country.clone()),
        config.max_concurrency,
    );

    let predicted = if args.baseline {
        processor.baseline_pass(&annotations).await?
    } else {
        processor.process_dataset(&annotations).await?
    };

    dataset::write_tsv(&args.output, &annotations, &predicted)?;
    tracing::info!(
        output = %args.output.display(),
        unresolved = predicted.iter().filter(|&&id| id == UNRESOLVED).count(),
        "enriched dataset written"
    );

    let report = AgreementReport::from_pairs(
        annotations
            .iter()
            .zip(&predicted)
            .map(|(annotation, &id)| (annotation.expected_id, id)),
    );
    println!("{report}");

    // Results depend on this run's configuration; never carry them over.
    resolver.clear_cache();

    Ok(())
}

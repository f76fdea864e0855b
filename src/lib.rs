//! Georesolve library crate (used by the CLI binary and integration tests).
//!
//! Resolves place-name mentions ("toponyms") extracted from articles to
//! GeoNames identifiers, then scores the predictions against ground-truth
//! labels.
//!
//! The disambiguation pipeline is two-phase and context-aware: country-level
//! mentions are resolved first to build a per-article geographic context, and
//! that context biases the harder lookups that follow. Every lookup is
//! memoized for the duration of a run, so repeated mentions of the same name
//! under the same conditions cost a single external call.
//!
//! # Module Overview
//!
//! - [`cache`] - Per-run memoization of gazetteer lookups ([`LookupCache`])
//! - [`bias`] - Country-bias directives built from article context
//! - [`resolver`] - Two-phase lookup strategies for a single toponym
//! - [`pipeline`] - Article grouping and phase ordering ([`ArticleProcessor`])
//! - [`scoring`] - Precision / recall / F1 agreement reporting
//! - [`gazetteer`] - The [`GazetteerClient`] seam and its GeoNames implementation
//! - [`dataset`] - Annotated TSV input and enriched TSV output
//! - [`config`] - Environment-backed configuration
//!
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod bias;
pub mod cache;
pub mod config;
pub mod dataset;
pub mod gazetteer;
pub mod pipeline;
pub mod resolver;
pub mod scoring;

pub use bias::{CountryBias, CountryBiasBuilder};
pub use cache::{LookupCache, LookupKey, LookupScope};
pub use config::{Config, ConfigError};
pub use dataset::{Annotation, DatasetError, read_tsv, write_tsv};
#[cfg(any(test, feature = "mock"))]
pub use gazetteer::MockGazetteerClient;
pub use gazetteer::{Candidate, GazetteerClient, GazetteerError, GeoNamesClient, SearchQuery};
pub use pipeline::ArticleProcessor;
pub use resolver::{Resolution, Resolver, UNRESOLVED};
pub use scoring::{AgreementReport, DegenerateMetric, MetricValue, ScoreTally};

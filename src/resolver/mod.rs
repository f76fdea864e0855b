//! Lookup strategies for a single toponym.
//!
//! Three operations, all memoized through [`LookupCache`]:
//!
//! - [`Resolver::resolve_country`] - the cheap first pass: is this mention a
//!   country (or continent)? Resolving countries early yields the country
//!   codes that bias the second pass.
//! - [`Resolver::resolve_with_bias`] - the context-aware second pass, falling
//!   back to the baseline query when the biased one comes up empty.
//! - [`Resolver::resolve_baseline`] - the simple unbiased query, also usable
//!   as a standalone mode.
//!
//! Transport failures from the gazetteer propagate untouched; retrying is the
//! client's concern, and an uncaught failure aborts the run. A response with
//! no candidates is ordinary data ([`Resolution::unresolved`]), never an
//! error.

pub mod types;


pub use types::{Resolution, UNRESOLVED};

use std::sync::Arc;

use tracing::debug;

use crate::bias::CountryBias;
use crate::cache::{LookupCache, LookupKey};
use crate::gazetteer::{Candidate, GazetteerClient, GazetteerError, SearchQuery};

/// Feature code marking a continent match.
const CONTINENT_CODE: &str = "CONT";
/// Feature-code prefix shared by political entities (PCLI, PCLD, PCLS, ...).
const POLITICAL_ENTITY_PREFIX: &str = "PCL";

/// Candidates fetched for a country-phase lookup.
const COUNTRY_CANDIDATES: u32 = 2;
/// Candidates fetched for biased and baseline lookups.
const SINGLE_CANDIDATE: u32 = 1;

/// Context-aware toponym resolver over a [`GazetteerClient`].
pub struct Resolver<G> {
    client: Arc<G>,
    cache: LookupCache,
    language: String,
}

impl<G: GazetteerClient> Resolver<G> {
    /// Creates a resolver querying in `language`.
    pub fn new(client: Arc<G>, language: impl Into<String>) -> Self {
        Self {
            client,
            cache: LookupCache::new(),
            language: language.into(),
        }
    }

    /// Returns the lookup cache.
    pub fn cache(&self) -> &LookupCache {
        &self.cache
    }

    /// Drops all memoized lookups. Call when a run completes; cached answers
    /// depend on the resolver configuration and must not outlive it.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Resolves a mention as a country (or continent).
    ///
    /// Fetches up to two candidates. A continent on top wins outright,
    /// without country context. Otherwise the first political entity among
    /// the candidates wins, carrying its country code. Anything else - an
    /// empty answer included - is an unresolved outcome, not an error.
    pub async fn resolve_country(&self, name: &str) -> Result<Resolution, GazetteerError> {
        let key = LookupKey::country(name, &self.language);
        let query = SearchQuery::new(
            name.trim(),
            Some(self.language.clone()),
            COUNTRY_CANDIDATES,
        );

        self.cache
            .get_or_compute(key, async {
                debug!(name = %query.name, "country lookup");
                let candidates = self.client.search(&query).await?;
                Ok(pick_political_entity(&candidates))
            })
            .await
    }

    /// Resolves a mention under a country bias, taking the top candidate.
    ///
    /// When the biased query yields nothing, retries through
    /// [`Resolver::resolve_baseline`]'s simpler query before giving up.
    pub async fn resolve_with_bias(
        &self,
        name: &str,
        bias: &CountryBias,
    ) -> Result<u64, GazetteerError> {
        let key = LookupKey::biased(name, &self.language, bias);
        let query = SearchQuery::new(name.trim(), Some(self.language.clone()), SINGLE_CANDIDATE)
            .with_bias(bias.clone());

        let resolution = self
            .cache
            .get_or_compute(key, async {
                debug!(name = %query.name, bias = %bias, "biased lookup");
                let candidates = self.client.search(&query).await?;
                match candidates.first() {
                    Some(top) => Ok(Resolution::of(top.id)),
                    None => self.baseline(&query.name).await,
                }
            })
            .await?;

        Ok(resolution.id)
    }

    /// Resolves a mention with the unbiased, language-agnostic query.
    pub async fn resolve_baseline(&self, name: &str) -> Result<u64, GazetteerError> {
        Ok(self.baseline(name).await?.id)
    }

    async fn baseline(&self, name: &str) -> Result<Resolution, GazetteerError> {
        let key = LookupKey::baseline(name);
        let query = SearchQuery::new(name.trim(), None, SINGLE_CANDIDATE);

        self.cache
            .get_or_compute(key, async {
                debug!(name = %query.name, "baseline lookup");
                let candidates = self.client.search(&query).await?;
                Ok(candidates
                    .first()
                    .map(|top| Resolution::of(top.id))
                    .unwrap_or_else(Resolution::unresolved))
            })
            .await
    }
}

impl<G> std::fmt::Debug for Resolver<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("language", &self.language)
            .field("cache", &self.cache)
            .finish()
    }
}

fn pick_political_entity(candidates: &[Candidate]) -> Resolution {
    let Some(top) = candidates.first() else {
        return Resolution::unresolved();
    };

    if top.feature_code == CONTINENT_CODE {
        return Resolution::of(top.id);
    }

    for candidate in candidates {
        if candidate.feature_code.starts_with(POLITICAL_ENTITY_PREFIX) {
            return Resolution {
                id: candidate.id,
                country_code: candidate.country_code.clone(),
            };
        }
    }

    Resolution::unresolved()
}

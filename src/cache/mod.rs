//! Per-run memoization of gazetteer lookups.
//!
//! Keys combine the normalized mention text with the lookup scope (country,
//! biased, or baseline), so the two resolution phases never collide on an
//! entry. Concurrent callers racing on the same key are coalesced: at most
//! one external call executes and every caller observes its result. Failed
//! computations are not cached, so a transient error does not poison a key.
//!
//! Entries live for the duration of one run. [`LookupCache::clear`] must be
//! called when the run finishes: cached answers depend on the resolver
//! configuration (language, default bias) and on gazetteer data that can
//! change between runs, so carrying them over is unsafe.


use std::future::Future;

use moka::future::Cache;

use crate::bias::CountryBias;
use crate::gazetteer::GazetteerError;
use crate::resolver::Resolution;

/// Cache key: normalized mention text plus lookup scope.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LookupKey {
    name: String,
    scope: LookupScope,
}

/// The conditions a lookup ran under. Part of the cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LookupScope {
    /// Country-phase lookup in a given language.
    Country { language: String },
    /// Context-biased lookup in a given language.
    Biased { language: String, bias: String },
    /// Unbiased, language-agnostic lookup.
    Baseline,
}

impl LookupKey {
    /// Key for a country-phase lookup.
    pub fn country(name: &str, language: &str) -> Self {
        Self {
            name: normalize(name),
            scope: LookupScope::Country {
                language: language.to_string(),
            },
        }
    }

    /// Key for a context-biased lookup.
    pub fn biased(name: &str, language: &str, bias: &CountryBias) -> Self {
        Self {
            name: normalize(name),
            scope: LookupScope::Biased {
                language: language.to_string(),
                bias: bias.signature(),
            },
        }
    }

    /// Key for a baseline lookup.
    pub fn baseline(name: &str) -> Self {
        Self {
            name: normalize(name),
            scope: LookupScope::Baseline,
        }
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_string()
}

/// Memoizes resolution results for the duration of a run.
pub struct LookupCache {
    entries: Cache<LookupKey, Resolution>,
}

impl LookupCache {
    const DEFAULT_CAPACITY: u64 = 100_000;

    /// Creates a cache with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Creates a cache with a max entry capacity.
    pub fn with_capacity(capacity: u64) -> Self {
        Self {
            entries: Cache::builder().max_capacity(capacity).build(),
        }
    }

    /// Returns the stored result for `key`, computing it on first sight.
    ///
    /// `compute` runs at most once per distinct key per run, even when
    /// multiple tasks ask for the same key concurrently; the losers of the
    /// race await the winner's result. Errors are propagated to every waiter
    /// and leave the key unpopulated.
    pub async fn get_or_compute<F>(
        &self,
        key: LookupKey,
        compute: F,
    ) -> Result<Resolution, GazetteerError>
    where
        F: Future<Output = Result<Resolution, GazetteerError>>,
    {
        self.entries
            .try_get_with(key, compute)
            .await
            .map_err(|e| e.as_ref().clone())
    }

    /// Returns `true` if `key` has a stored result.
    pub fn contains(&self, key: &LookupKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Drops every entry. Required at run end; results may legitimately
    /// differ between runs with different resolver configuration.
    pub fn clear(&self) {
        self.entries.invalidate_all();
    }

    /// Returns the number of stored entries.
    pub async fn len(&self) -> u64 {
        self.entries.run_pending_tasks().await;
        self.entries.entry_count()
    }

    /// Returns `true` if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for LookupCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LookupCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LookupCache")
            .field("entries", &self.entries.entry_count())
            .finish()
    }
}

//! Country-bias directives built from an article's resolved country context.

use std::collections::BTreeSet;

/// Bias directive consumed by context-aware gazetteer queries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CountryBias {
    /// Rank matches in this country above equally-good matches elsewhere.
    Prefer(String),
    /// Only consider matches inside this country.
    Restrict(String),
}

impl CountryBias {
    /// Returns the (parameter name, country code) pair for a gazetteer query.
    pub fn query_param(&self) -> (&'static str, &str) {
        match self {
            CountryBias::Prefer(code) => ("countryBias", code),
            CountryBias::Restrict(code) => ("country", code),
        }
    }

    /// Returns the country code the directive points at.
    pub fn country(&self) -> &str {
        match self {
            CountryBias::Prefer(code) | CountryBias::Restrict(code) => code,
        }
    }

    /// Stable textual form, usable as a cache-key component.
    pub fn signature(&self) -> String {
        match self {
            CountryBias::Prefer(code) => format!("prefer:{code}"),
            CountryBias::Restrict(code) => format!("restrict:{code}"),
        }
    }
}

impl std::fmt::Display for CountryBias {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.signature())
    }
}

/// Builds a [`CountryBias`] from the set of country codes resolved so far.
#[derive(Debug, Clone)]
pub struct CountryBiasBuilder {
    default_country: String,
}

impl CountryBiasBuilder {
    /// Creates a builder falling back to `default_country` for empty context.
    pub fn new(default_country: impl Into<String>) -> Self {
        Self {
            default_country: default_country.into(),
        }
    }

    /// Turns resolved country codes into a bias directive.
    ///
    /// No codes means no context: prefer the configured fallback country.
    /// A single code becomes a preference for that country. Two or more codes
    /// degrade to a hard restriction on one representative - the
    /// lexicographically smallest code - because the query syntax carries a
    /// single country per request. Callers must not depend on which member of
    /// the set is chosen, only on the choice being deterministic.
    pub fn build(&self, codes: &BTreeSet<String>) -> CountryBias {
        let mut iter = codes.iter();
        match (iter.next(), iter.next()) {
            (None, _) => CountryBias::Prefer(self.default_country.clone()),
            (Some(only), None) => CountryBias::Prefer(only.clone()),
            (Some(smallest), Some(_)) => CountryBias::Restrict(smallest.clone()),
        }
    }
}

use crate::bias::CountryBias;

/// A single gazetteer match, in the service's ranking order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// GeoNames identifier. `0` when the service omitted the field.
    pub id: u64,
    /// Feature code, e.g. `PCLI` for an independent political entity or
    /// `CONT` for a continent. Empty when omitted.
    pub feature_code: String,
    /// ISO country code of the match, when the feature belongs to a country.
    pub country_code: Option<String>,
}

impl Candidate {
    /// Creates a candidate without a country code.
    pub fn new(id: u64, feature_code: impl Into<String>) -> Self {
        Self {
            id,
            feature_code: feature_code.into(),
            country_code: None,
        }
    }

    /// Attaches a country code.
    pub fn with_country(mut self, code: impl Into<String>) -> Self {
        self.country_code = Some(code.into());
        self
    }
}

/// Parameters of one gazetteer search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Place name to look up.
    pub name: String,
    /// Language tag for the search, or `None` for a language-agnostic query.
    pub language: Option<String>,
    /// Maximum number of candidates to return.
    pub max_results: u32,
    /// Country bias applied to the search, if any.
    pub bias: Option<CountryBias>,
}

impl SearchQuery {
    /// A query restricted to `max_results` candidates, without bias.
    pub fn new(name: impl Into<String>, language: Option<String>, max_results: u32) -> Self {
        Self {
            name: name.into(),
            language,
            max_results,
            bias: None,
        }
    }

    /// Applies a country bias to the query.
    pub fn with_bias(mut self, bias: CountryBias) -> Self {
        self.bias = Some(bias);
        self
    }
}

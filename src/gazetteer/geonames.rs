//! GeoNames `searchJSON` client.
//!
//! Wire format reference: <http://www.geonames.org/export/geonames-search.html>.
//! A "no results" answer is an empty `geonames` array; an auth or quota
//! problem arrives as a `status` object in an otherwise-200 response.

use reqwest::Client as HttpClient;
use serde::Deserialize;
use tracing::debug;

use super::error::GazetteerError;
use super::model::{Candidate, SearchQuery};
use super::GazetteerClient;
use crate::config::Config;

use async_trait::async_trait;

/// GeoNames web-service client.
pub struct GeoNamesClient {
    http: HttpClient,
    base_url: String,
    username: String,
}

impl GeoNamesClient {
    /// Creates a client from `config` (endpoint, username, timeout).
    pub fn new(config: &Config) -> Result<Self, GazetteerError> {
        let http = HttpClient::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| GazetteerError::ClientBuildFailed {
                message: e.to_string(),
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            username: config.username.clone(),
        })
    }

    /// Returns the configured endpoint.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_params(&self, query: &SearchQuery) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("q", query.name.clone()),
            ("maxRows", query.max_results.to_string()),
            ("username", self.username.clone()),
        ];

        if let Some(language) = &query.language {
            params.push(("searchlang", language.clone()));
        }

        if let Some(bias) = &query.bias {
            let (key, code) = bias.query_param();
            params.push((key, code.to_string()));
        }

        params
    }
}

impl std::fmt::Debug for GeoNamesClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeoNamesClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl GazetteerClient for GeoNamesClient {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Candidate>, GazetteerError> {
        let url = format!("{}/searchJSON", self.base_url);
        let params = self.build_params(query);

        let response = self
            .http
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| GazetteerError::RequestFailed {
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GazetteerError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body: SearchResponse =
            response
                .json()
                .await
                .map_err(|e| GazetteerError::InvalidResponse {
                    message: e.to_string(),
                })?;

        if let Some(status) = body.status {
            return Err(GazetteerError::Rejected {
                code: status.value,
                message: status.message,
            });
        }

        debug!(
            name = %query.name,
            candidates = body.geonames.len(),
            "gazetteer search completed"
        );

        Ok(body.geonames.into_iter().map(Candidate::from).collect())
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    geonames: Vec<WireCandidate>,
    status: Option<WireStatus>,
}

#[derive(Debug, Deserialize)]
struct WireCandidate {
    #[serde(rename = "geonameId")]
    geoname_id: Option<u64>,
    fcode: Option<String>,
    #[serde(rename = "countryCode")]
    country_code: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireStatus {
    message: String,
    value: i64,
}

impl From<WireCandidate> for Candidate {
    fn from(wire: WireCandidate) -> Self {
        Self {
            id: wire.geoname_id.unwrap_or_default(),
            feature_code: wire.fcode.unwrap_or_default(),
            country_code: wire.country_code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_response() {
        let body = r#"{
            "totalResultsCount": 2,
            "geonames": [
                {"geonameId": 2988507, "fcode": "PPLC", "countryCode": "FR", "name": "Paris"},
                {"geonameId": 3017382, "fcode": "PCLI", "countryCode": "FR", "name": "France"}
            ]
        }"#;

        let parsed: SearchResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.status.is_none());

        let candidates: Vec<Candidate> = parsed.geonames.into_iter().map(Candidate::from).collect();
        assert_eq!(
            candidates,
            vec![
                Candidate::new(2988507, "PPLC").with_country("FR"),
                Candidate::new(3017382, "PCLI").with_country("FR"),
            ]
        );
    }

    #[test]
    fn test_parse_empty_response() {
        let body = r#"{"totalResultsCount": 0, "geonames": []}"#;

        let parsed: SearchResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.geonames.is_empty());
        assert!(parsed.status.is_none());
    }

    #[test]
    fn test_parse_missing_geonames_array() {
        let parsed: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.geonames.is_empty());
    }

    #[test]
    fn test_parse_status_payload() {
        let body = r#"{"status": {"message": "user does not exist.", "value": 10}}"#;

        let parsed: SearchResponse = serde_json::from_str(body).unwrap();
        let status = parsed.status.unwrap();
        assert_eq!(status.value, 10);
        assert_eq!(status.message, "user does not exist.");
    }

    #[test]
    fn test_candidate_defaults_for_missing_fields() {
        let body = r#"{"geonames": [{"name": "Nowhere"}]}"#;

        let parsed: SearchResponse = serde_json::from_str(body).unwrap();
        let candidate = Candidate::from(parsed.geonames.into_iter().next().unwrap());

        assert_eq!(candidate.id, 0);
        assert!(candidate.feature_code.is_empty());
        assert!(candidate.country_code.is_none());
    }
}

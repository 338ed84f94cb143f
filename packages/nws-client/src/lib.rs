//! Pure NWS (api.weather.gov) REST API client.
//!
//! A minimal client for the National Weather Service API. Builds filtered
//! alert queries, fans the HTTP calls out concurrently over one shared
//! client, and flattens the nested JSON responses into flat records.
//!
//! # Example
//!
//! ```rust,ignore
//! use nws_client::{AlertQuery, NwsClient};
//!
//! let client = NwsClient::new();
//!
//! let query = AlertQuery {
//!     area: vec!["KS".into()],
//!     limit: Some(10),
//!     ..Default::default()
//! };
//! let alerts = client.get_alerts(&query).await?;
//! for alert in &alerts {
//!     println!("{}", alert.headline.as_deref().unwrap_or("(no headline)"));
//! }
//! ```

pub mod error;
pub mod query;
pub mod types;

pub use error::{NwsError, Result};
pub use query::AlertQuery;
pub use types::{AlertRecord, ApiEnvelope, GlossaryEntry, Payload, RawResponse};

use futures::future::try_join_all;
use serde_json::Value;
use types::{parse_alerts, parse_glossary};

const BASE_URL: &str = "https://api.weather.gov";

pub struct NwsClient {
    client: reqwest::Client,
    base_url: String,
}

impl NwsClient {
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL.to_string())
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch alerts matching `query`, flattened to one record per feature.
    ///
    /// A query with more than one location filter set is abandoned before it
    /// reaches the wire and yields no records.
    pub async fn get_alerts(&self, query: &AlertQuery) -> Result<Vec<AlertRecord>> {
        if let Some((first, second)) = query.location_conflict() {
            tracing::warn!(
                first,
                second,
                "Conflicting location filters, dropping alerts query"
            );
            return Ok(Vec::new());
        }

        let params = vec![query.to_params()];
        let raw = self.get_batch(&["/alerts"], Some(&params)).await?;
        let envelopes: Vec<ApiEnvelope> = raw.into_iter().map(ApiEnvelope::from_raw).collect();

        let records = parse_alerts(&envelopes);
        tracing::info!(count = records.len(), "Fetched alerts");
        Ok(records)
    }

    /// Fetch the glossary, flattened to its entries.
    pub async fn get_glossary(&self) -> Result<Vec<GlossaryEntry>> {
        let raw = self.get_batch(&["/glossary"], None).await?;
        let envelopes: Vec<ApiEnvelope> = raw.into_iter().map(ApiEnvelope::from_raw).collect();

        let entries = parse_glossary(&envelopes);
        tracing::info!(count = entries.len(), "Fetched glossary entries");
        Ok(entries)
    }

    /// Issue one GET per path, all concurrently over the shared client.
    ///
    /// `params` is an optional parallel slice of query bags; paths past its
    /// length go out bare. The join is all-or-nothing: the first transport
    /// failure fails the whole batch. Results come back in input order.
    pub async fn get_batch(
        &self,
        paths: &[&str],
        params: Option<&[Vec<(String, String)>]>,
    ) -> Result<Vec<RawResponse>> {
        let requests = plan(paths, params)
            .into_iter()
            .map(|(path, query)| self.get_raw(path, query));
        try_join_all(requests).await
    }

    /// POST counterpart to [`get_batch`](Self::get_batch). Each response
    /// body is parsed as JSON with fallback to the raw text.
    pub async fn post_batch(
        &self,
        paths: &[&str],
        bodies: Option<&[Value]>,
    ) -> Result<Vec<Payload>> {
        let requests = plan(paths, bodies)
            .into_iter()
            .map(|(path, body)| self.post_raw(path, body));
        try_join_all(requests).await
    }

    async fn get_raw(
        &self,
        path: &str,
        query: Option<&Vec<(String, String)>>,
    ) -> Result<RawResponse> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.get(&url);
        if let Some(query) = query {
            request = request.query(query);
        }

        let response = request.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await?;
        tracing::debug!(%status, url, "GET completed");

        Ok(RawResponse {
            headers,
            status,
            body,
        })
    }

    async fn post_raw(&self, path: &str, body: Option<&Value>) -> Result<Payload> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.post(&url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        tracing::debug!(%status, url, "POST completed");

        Ok(Payload::from_text(text))
    }
}

impl Default for NwsClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Pair each path with its argument bag, preserving input order. Paths past
/// the end of `args` get `None`.
fn plan<'a, T>(paths: &'a [&'a str], args: Option<&'a [T]>) -> Vec<(&'a str, Option<&'a T>)> {
    paths
        .iter()
        .enumerate()
        .map(|(i, path)| (*path, args.and_then(|a| a.get(i))))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_preserves_input_order() {
        let paths = ["/alerts", "/glossary", "/alerts"];
        let args = vec![
            vec![("area".to_string(), "KS".to_string())],
            vec![],
            vec![("area".to_string(), "MO".to_string())],
        ];

        let planned = plan(&paths, Some(&args));
        assert_eq!(planned.len(), 3);
        assert_eq!(planned[0].0, "/alerts");
        assert_eq!(planned[0].1, Some(&args[0]));
        assert_eq!(planned[1].0, "/glossary");
        assert_eq!(planned[2].1, Some(&args[2]));
    }

    #[tokio::test]
    async fn test_conflicting_location_filters_yield_empty_result() {
        // The conflict check short-circuits before anything hits the wire.
        let client = NwsClient::with_base_url("http://127.0.0.1:9".to_string());
        let query = AlertQuery {
            area: vec!["KS".to_string()],
            zone: vec!["KSZ025".to_string()],
            ..Default::default()
        };

        let records = client.get_alerts(&query).await.unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_plan_pads_missing_args_with_none() {
        let paths = ["/alerts", "/glossary"];
        let args = vec![vec![("limit".to_string(), "5".to_string())]];

        let planned = plan(&paths, Some(&args));
        assert_eq!(planned[0].1, Some(&args[0]));
        assert_eq!(planned[1].1, None);

        let bare = plan::<Vec<(String, String)>>(&paths, None);
        assert!(bare.iter().all(|(_, args)| args.is_none()));
    }
}

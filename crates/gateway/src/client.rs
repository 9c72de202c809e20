//! HTTP client for the hosted data API.
//!
//! This module provides a shared client for the store's REST query
//! interface. Every repository in this crate goes through [`RestClient`]:
//! a request starts from a relation name, accumulates filters and ordering
//! through [`QueryBuilder`], and ends in one of the terminal operations
//! (`fetch`, `insert`, `update`, `delete`, ...).

use log::debug;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::GatewayConfig;
use crate::errors::{ApiErrorBody, RestError};

/// Path prefix of the query interface, relative to the project base URL.
const REST_PATH: &str = "/rest/v1";

static APIKEY: HeaderName = HeaderName::from_static("apikey");
static PREFER: HeaderName = HeaderName::from_static("prefer");

// ─────────────────────────────────────────────────────────────────────────────
// Rest Client
// ─────────────────────────────────────────────────────────────────────────────

/// Shared client for the hosted REST query interface.
///
/// Cheap to clone; repositories hold it behind an `Arc` and start every
/// request with [`RestClient::from`].
#[derive(Debug, Clone)]
pub struct RestClient {
    http: reqwest::Client,
    base_url: String,
    api_key_header: HeaderValue,
    auth_header: HeaderValue,
}

impl RestClient {
    /// Creates a client that authenticates with the project API key alone.
    pub fn new(config: &GatewayConfig) -> Result<Self, RestError> {
        let api_key_header = HeaderValue::from_str(&config.api_key)
            .map_err(|e| RestError::Config(format!("API key is not a valid header: {}", e)))?;
        let auth_header = bearer_header(&config.api_key)?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(RestError::Transport)?;

        Ok(Self {
            http,
            base_url: config.url.clone(),
            api_key_header,
            auth_header,
        })
    }

    /// Returns a copy of this client that sends the given access token as
    /// its bearer credential, for requests on behalf of a signed-in admin.
    pub fn with_bearer(&self, access_token: &str) -> Result<Self, RestError> {
        let mut client = self.clone();
        client.auth_header = bearer_header(access_token)?;
        Ok(client)
    }

    /// Starts a query against one relation.
    pub fn from(&self, relation: &'static str) -> QueryBuilder<'_> {
        QueryBuilder {
            client: self,
            relation,
            params: Vec::new(),
            order: Vec::new(),
            filtered: false,
        }
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(APIKEY.clone(), self.api_key_header.clone());
        headers.insert(AUTHORIZATION, self.auth_header.clone());
        headers
    }
}

fn bearer_header(token: &str) -> Result<HeaderValue, RestError> {
    HeaderValue::from_str(&format!("Bearer {}", token))
        .map_err(|e| RestError::Config(format!("Access token is not a valid header: {}", e)))
}

// ─────────────────────────────────────────────────────────────────────────────
// Query Builder
// ─────────────────────────────────────────────────────────────────────────────

/// One request in the making: a relation plus accumulated query parameters.
///
/// Mutating operations (`update`, `delete`) refuse to run without at least
/// one row filter; a missing filter would silently rewrite the whole
/// relation.
pub struct QueryBuilder<'a> {
    client: &'a RestClient,
    relation: &'static str,
    params: Vec<(String, String)>,
    order: Vec<String>,
    filtered: bool,
}

impl<'a> QueryBuilder<'a> {
    /// Restricts the returned columns, including embedded resources, e.g.
    /// `"*,package_details(*)"`.
    pub fn select(mut self, columns: &str) -> Self {
        self.params.push(("select".to_string(), columns.to_string()));
        self
    }

    /// Keeps rows whose column equals the given value.
    pub fn eq(mut self, column: &str, value: impl ToString) -> Self {
        self.params
            .push((column.to_string(), format!("eq.{}", value.to_string())));
        self.filtered = true;
        self
    }

    /// Keeps rows whose column is one of the given values. Values are quoted
    /// so embedded commas survive; double quotes themselves cannot.
    pub fn in_list(mut self, column: &str, values: &[String]) -> Self {
        let quoted = values
            .iter()
            .map(|v| format!("\"{}\"", v.replace('"', "")))
            .collect::<Vec<_>>()
            .join(",");
        self.params
            .push((column.to_string(), format!("in.({})", quoted)));
        self.filtered = true;
        self
    }

    pub fn order_asc(mut self, column: &str) -> Self {
        self.order.push(format!("{}.asc", column));
        self
    }

    pub fn order_desc(mut self, column: &str) -> Self {
        self.order.push(format!("{}.desc", column));
        self
    }

    pub fn limit(mut self, count: usize) -> Self {
        self.params.push(("limit".to_string(), count.to_string()));
        self
    }

    /// Fetches all matching rows.
    pub async fn fetch<T: DeserializeOwned>(self) -> Result<Vec<T>, RestError> {
        let url = self.build_url()?;
        debug!("[Gateway] GET {}", url);
        let request = self.client.http.get(url).headers(self.client.headers());
        self.parse_rows(request.send().await?).await
    }

    /// Fetches at most one row.
    pub async fn fetch_optional<T: DeserializeOwned>(mut self) -> Result<Option<T>, RestError> {
        self.params.push(("limit".to_string(), "1".to_string()));
        let rows = self.fetch().await?;
        Ok(rows.into_iter().next())
    }

    /// Inserts one row and returns its stored representation.
    pub async fn insert<B, T>(self, row: &B) -> Result<T, RestError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let relation = self.relation;
        let rows = self.insert_rows(row).await?;
        single_row(relation, rows)
    }

    /// Inserts a batch of rows and returns their stored representations.
    pub async fn insert_all<B, T>(self, rows: &[B]) -> Result<Vec<T>, RestError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        self.insert_rows(rows).await
    }

    async fn insert_rows<B, T>(self, body: &B) -> Result<Vec<T>, RestError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.build_url()?;
        debug!("[Gateway] POST {}", url);
        let request = self
            .client
            .http
            .post(url)
            .headers(self.client.headers())
            .header(PREFER.clone(), "return=representation")
            .json(body);
        self.parse_rows(request.send().await?).await
    }

    /// Inserts or merges one row, keyed on the given conflict column.
    pub async fn upsert<B>(mut self, row: &B, conflict_column: &str) -> Result<(), RestError>
    where
        B: Serialize + ?Sized,
    {
        self.params
            .push(("on_conflict".to_string(), conflict_column.to_string()));
        let url = self.build_url()?;
        debug!("[Gateway] POST {} (upsert on {})", url, conflict_column);
        let request = self
            .client
            .http
            .post(url)
            .headers(self.client.headers())
            .header(PREFER.clone(), "resolution=merge-duplicates, return=minimal")
            .json(row);
        self.expect_success(request.send().await?).await
    }

    /// Applies a column patch to the filtered rows.
    pub async fn update<B>(self, patch: &B) -> Result<(), RestError>
    where
        B: Serialize + ?Sized,
    {
        self.require_filter("update")?;
        let url = self.build_url()?;
        debug!("[Gateway] PATCH {}", url);
        let request = self
            .client
            .http
            .patch(url)
            .headers(self.client.headers())
            .header(PREFER.clone(), "return=minimal")
            .json(patch);
        self.expect_success(request.send().await?).await
    }

    /// Applies a column patch and returns the updated row.
    pub async fn update_returning<B, T>(self, patch: &B) -> Result<T, RestError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.require_filter("update")?;
        let url = self.build_url()?;
        debug!("[Gateway] PATCH {}", url);
        let request = self
            .client
            .http
            .patch(url)
            .headers(self.client.headers())
            .header(PREFER.clone(), "return=representation")
            .json(patch);
        let relation = self.relation;
        let rows = self.parse_rows(request.send().await?).await?;
        single_row(relation, rows)
    }

    /// Deletes the filtered rows.
    pub async fn delete(self) -> Result<(), RestError> {
        self.require_filter("delete")?;
        let url = self.build_url()?;
        debug!("[Gateway] DELETE {}", url);
        let request = self.client.http.delete(url).headers(self.client.headers());
        self.expect_success(request.send().await?).await
    }

    fn build_url(&self) -> Result<Url, RestError> {
        let endpoint = format!("{}{}/{}", self.client.base_url, REST_PATH, self.relation);
        if self.params.is_empty() && self.order.is_empty() {
            return Url::parse(&endpoint).map_err(|e| RestError::Url(e.to_string()));
        }
        let mut params = self.params.clone();
        if !self.order.is_empty() {
            params.push(("order".to_string(), self.order.join(",")));
        }
        Url::parse_with_params(&endpoint, &params).map_err(|e| RestError::Url(e.to_string()))
    }

    fn require_filter(&self, verb: &'static str) -> Result<(), RestError> {
        if self.filtered {
            Ok(())
        } else {
            Err(RestError::UnfilteredMutation {
                verb,
                relation: self.relation.to_string(),
            })
        }
    }

    async fn parse_rows<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<Vec<T>, RestError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(self.api_error(status.as_u16(), &body));
        }

        serde_json::from_str(&body).map_err(|e| RestError::Decode {
            relation: self.relation.to_string(),
            message: e.to_string(),
        })
    }

    async fn expect_success(&self, response: reqwest::Response) -> Result<(), RestError> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await?;
        Err(self.api_error(status.as_u16(), &body))
    }

    fn api_error(&self, status: u16, body: &str) -> RestError {
        let parsed: ApiErrorBody = serde_json::from_str(body).unwrap_or_default();
        let mut message = parsed
            .message
            .unwrap_or_else(|| body.chars().take(200).collect());
        if let Some(details) = parsed.details {
            message = format!("{} ({})", message, details);
        }
        if let Some(hint) = parsed.hint {
            message = format!("{} [hint: {}]", message, hint);
        }
        RestError::Api {
            status,
            code: parsed.code,
            message: format!("{} on '{}'", message, self.relation),
        }
    }
}

fn single_row<T>(relation: &str, rows: Vec<T>) -> Result<T, RestError> {
    rows.into_iter().next().ok_or_else(|| RestError::Decode {
        relation: relation.to_string(),
        message: "expected one returned row, got none".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> RestClient {
        let config = GatewayConfig::new("https://demo.example.co", "service-key");
        RestClient::new(&config).unwrap()
    }

    fn query_value(url: &Url, key: &str) -> Option<String> {
        url.query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.to_string())
    }

    #[test]
    fn test_build_url_plain_relation() {
        let client = test_client();
        let url = client.from("packages").build_url().unwrap();
        assert_eq!(url.as_str(), "https://demo.example.co/rest/v1/packages");
    }

    #[test]
    fn test_build_url_with_filters_and_order() {
        let client = test_client();
        let url = client
            .from("packages")
            .select("*")
            .eq("package_id", 42)
            .order_desc("created_at")
            .order_asc("price")
            .limit(5)
            .build_url()
            .unwrap();

        assert_eq!(query_value(&url, "select").as_deref(), Some("*"));
        assert_eq!(query_value(&url, "package_id").as_deref(), Some("eq.42"));
        assert_eq!(
            query_value(&url, "order").as_deref(),
            Some("created_at.desc,price.asc")
        );
        assert_eq!(query_value(&url, "limit").as_deref(), Some("5"));
    }

    #[test]
    fn test_in_list_quotes_values() {
        let client = test_client();
        let url = client
            .from("attractions")
            .in_list(
                "attraction_code",
                &["AT-1".to_string(), "AT,2".to_string()],
            )
            .build_url()
            .unwrap();

        assert_eq!(
            query_value(&url, "attraction_code").as_deref(),
            Some("in.(\"AT-1\",\"AT,2\")")
        );
    }

    #[tokio::test]
    async fn test_update_without_filter_is_refused() {
        let client = test_client();
        let result = client
            .from("packages")
            .update(&serde_json::json!({ "price": 1 }))
            .await;

        assert!(matches!(
            result,
            Err(RestError::UnfilteredMutation { verb: "update", .. })
        ));
    }

    #[tokio::test]
    async fn test_delete_without_filter_is_refused() {
        let client = test_client();
        let result = client.from("packages").delete().await;

        assert!(matches!(
            result,
            Err(RestError::UnfilteredMutation { verb: "delete", .. })
        ));
    }

    #[test]
    fn test_single_row_rejects_empty_response() {
        let result: Result<i32, _> = single_row("packages", Vec::new());
        assert!(matches!(result, Err(RestError::Decode { .. })));
    }
}

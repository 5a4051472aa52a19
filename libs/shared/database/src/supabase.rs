use async_trait::async_trait;
use reqwest::{
    Client,
    header::{HeaderMap, HeaderValue, CONTENT_TYPE, AUTHORIZATION},
    Method,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};

use shared_config::AppConfig;

use crate::backend::RecordBackend;
use crate::error::DatabaseError;

/// Rows requested per page when reading a whole table.
pub const DEFAULT_PAGE_SIZE: usize = 1000;

/// PostgREST client for a Supabase-hosted database.
pub struct SupabaseClient {
    client: Client,
    base_url: String,
    anon_key: String,
    service_role_key: Option<String>,
    page_size: usize,
}

impl SupabaseClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.supabase_url.trim_end_matches('/').to_string(),
            anon_key: config.supabase_anon_key.clone(),
            service_role_key: config.supabase_service_role_key.clone(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    fn get_headers(&self, return_representation: bool) -> Result<HeaderMap, DatabaseError> {
        let mut headers = HeaderMap::new();

        headers.insert("apikey", header_value(&self.anon_key)?);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let token = self.service_role_key.as_deref().unwrap_or(&self.anon_key);
        headers.insert(AUTHORIZATION, header_value(&format!("Bearer {}", token))?);

        if return_representation {
            headers.insert("Prefer", HeaderValue::from_static("return=representation"));
        }

        Ok(headers)
    }

    pub async fn request<T>(&self, method: Method, path: &str,
                            body: Option<Value>, return_representation: bool)
                            -> Result<T, DatabaseError>
    where T: DeserializeOwned {
        let url = format!("{}{}", self.base_url, path);
        debug!("Making {} request to {}", method, url);

        let headers = self.get_headers(return_representation)?;

        let mut req = self.client.request(method, &url)
            .headers(headers);

        if let Some(body_data) = body {
            req = req.json(&body_data);
        }

        let response = req.send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await?;
            error!("API error ({}): {}", status, error_text);

            return Err(DatabaseError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let data = response.json::<T>().await?;
        Ok(data)
    }
}

fn header_value(raw: &str) -> Result<HeaderValue, DatabaseError> {
    HeaderValue::from_str(raw).map_err(|e| DatabaseError::InvalidHeader(e.to_string()))
}

#[async_trait]
impl RecordBackend for SupabaseClient {
    fn name(&self) -> &'static str {
        "supabase"
    }

    async fn insert(&self, table: &str, row: Value) -> Result<Value, DatabaseError> {
        let path = format!("/rest/v1/{}", table);

        let rows: Vec<Value> = self.request(Method::POST, &path, Some(row), true).await?;

        rows.into_iter()
            .next()
            .ok_or_else(|| DatabaseError::EmptyResponse { table: table.to_string() })
    }

    async fn select_all(&self, table: &str) -> Result<Vec<Value>, DatabaseError> {
        let mut rows = Vec::new();

        // The server may cap a page below `page_size` (max-rows), so only an
        // empty page marks the end of the table.
        loop {
            let path = format!(
                "/rest/v1/{}?select=*&order=id.asc&limit={}&offset={}",
                table, self.page_size, rows.len()
            );

            let page: Vec<Value> = self.request(Method::GET, &path, None, false).await?;
            if page.is_empty() {
                break;
            }

            debug!("Fetched {} rows from {} at offset {}", page.len(), table, rows.len());
            rows.extend(page);
        }

        Ok(rows)
    }

    async fn update_by_id(
        &self,
        table: &str,
        id: i64,
        patch: Value,
    ) -> Result<Option<Value>, DatabaseError> {
        let path = format!("/rest/v1/{}?id=eq.{}", table, id);

        // PostgREST answers a PATCH that matched nothing with an empty array.
        let rows: Vec<Value> = self.request(Method::PATCH, &path, Some(patch), true).await?;

        Ok(rows.into_iter().next())
    }
}

//! `reqwest` transport for the case service.

use std::time::Duration;

use async_trait::async_trait;
use board::remote::{ALL_PATH, MINE_PATH, SEARCH_PATH, StatusUpdate, bearer, item_path, status_path};
use board::{ItemId, Remote, RemoteError, SearchQuery, Status, WorkItem};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::CliError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Native implementation of [`Remote`] with a fixed bearer token.
pub struct ReqwestRemote {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestRemote {
    pub fn new(base_url: &str, token: &str) -> Result<Self, CliError> {
        let mut auth = HeaderValue::from_str(&bearer(token))?;
        auth.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client, base_url: base_url.trim_end_matches('/').to_owned() })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&'static str, String)]) -> Result<T, RemoteError> {
        let url = self.url(path);
        debug!(%url, params = query.len(), "GET");
        let response = self.client.get(&url).query(query).send().await.map_err(transport)?;
        let body = checked_body(&url, response).await?;
        serde_json::from_str(&body).map_err(|e| RemoteError::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl Remote for ReqwestRemote {
    async fn fetch_all(&self) -> Result<Vec<WorkItem>, RemoteError> {
        self.get_json(ALL_PATH, &[]).await
    }

    async fn fetch_mine(&self) -> Result<Vec<WorkItem>, RemoteError> {
        self.get_json(MINE_PATH, &[]).await
    }

    async fn fetch_one(&self, id: ItemId) -> Result<WorkItem, RemoteError> {
        self.get_json(&item_path(id), &[]).await
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<WorkItem>, RemoteError> {
        self.get_json(SEARCH_PATH, &query.pairs()).await
    }

    async fn put_status(&self, id: ItemId, status: Status) -> Result<(), RemoteError> {
        let url = self.url(&status_path(id));
        debug!(%url, status = status.as_wire(), "PUT");
        let response = self
            .client
            .put(&url)
            .json(&StatusUpdate { zustand: status })
            .send()
            .await
            .map_err(transport)?;
        checked_body(&url, response).await?;
        Ok(())
    }
}

fn transport(err: reqwest::Error) -> RemoteError {
    RemoteError::Transport(err.to_string())
}

/// Response body of a successful call; non-success statuses become
/// [`RemoteError::Status`] with the body's `detail`, if any.
async fn checked_body(url: &str, response: reqwest::Response) -> Result<String, RemoteError> {
    let status = response.status();
    let body = response.text().await.map_err(transport)?;
    if status.is_success() {
        return Ok(body);
    }
    warn!(%url, status = status.as_u16(), "request rejected");
    Err(RemoteError::from_response(status.as_u16(), &body))
}

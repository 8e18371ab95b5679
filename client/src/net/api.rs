//! `gloo-net` transport for the case service.
//!
//! Client-side (csr): real HTTP calls carrying the stored bearer token.
//! Native builds (tests): every call fails with a transport error naming the
//! URL it would have hit, so the `Remote` contract still holds.
//!
//! ERROR HANDLING
//! ==============
//! Non-success responses are mapped through `RemoteError::from_response`, so
//! a `detail` field in the body becomes the message the page shows. Nothing
//! here retries; the user re-triggers the action.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use board::remote::{ALL_PATH, MINE_PATH, SEARCH_PATH, StatusUpdate, item_path, status_path};
use board::{ItemId, Remote, RemoteError, SearchQuery, Status, WorkItem};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::util::config::api_base_url;

/// HTTP implementation of [`Remote`] for the browser.
#[derive(Clone, Debug)]
pub struct HttpRemote {
    base_url: String,
}

impl HttpRemote {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self { base_url: base_url.trim_end_matches('/').to_owned() }
    }

    /// Remote pointed at the build-time configured service.
    pub fn from_config() -> Self {
        Self::new(api_base_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        endpoint(&self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&'static str, String)]) -> Result<T, RemoteError> {
        let url = self.url(path);
        #[cfg(feature = "csr")]
        {
            log::debug!("GET {url}");
            let mut request = authorized(gloo_net::http::Request::get(&url));
            if !query.is_empty() {
                request = request.query(query.iter().map(|(key, value)| (*key, value.as_str())));
            }
            let response = request.send().await.map_err(|e| RemoteError::Transport(e.to_string()))?;
            let response = check(&url, response).await?;
            response.json::<T>().await.map_err(|e| RemoteError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = query;
            Err(unavailable(&url))
        }
    }

    async fn put_json<B: Serialize>(&self, path: &str, body: &B) -> Result<(), RemoteError> {
        let url = self.url(path);
        #[cfg(feature = "csr")]
        {
            log::debug!("PUT {url}");
            let request = authorized(gloo_net::http::Request::put(&url))
                .json(body)
                .map_err(|e| RemoteError::Transport(e.to_string()))?;
            let response = request.send().await.map_err(|e| RemoteError::Transport(e.to_string()))?;
            check(&url, response).await?;
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = body;
            Err(unavailable(&url))
        }
    }
}

#[async_trait(?Send)]
impl Remote for HttpRemote {
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
        self.put_json(&status_path(id), &StatusUpdate { zustand: status }).await
    }
}

fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

#[cfg(feature = "csr")]
fn authorized(request: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match crate::util::auth::read_token() {
        Some(token) => request.header("Authorization", &board::remote::bearer(&token)),
        None => request,
    }
}

#[cfg(feature = "csr")]
async fn check(url: &str, response: gloo_net::http::Response) -> Result<gloo_net::http::Response, RemoteError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    log::warn!("{url} answered {status}");
    Err(RemoteError::from_response(status, &body))
}

#[cfg(any(test, not(feature = "csr")))]
fn unavailable(url: &str) -> RemoteError {
    RemoteError::Transport(format!("no browser transport for {url}"))
}

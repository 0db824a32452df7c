//! Browser adapters
//!
//! `window.localStorage` as a `KeyValueStore`, the Fetch API (through
//! gloo-net) as a `LoginTransport`, and the `<body>` class toggle used for the
//! teacher-mode marker. Client-side only.

use gloo_net::http::Request;
use leptos::web_sys;

use crate::core::{KeyValueStore, LoginError, LoginReply, LoginTransport, StoreError};

/// `window.localStorage`, looked up on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage() -> Result<web_sys::Storage, StoreError> {
        let window =
            web_sys::window().ok_or_else(|| StoreError::Unavailable("No window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StoreError::Unavailable("localStorage not available".to_string()))
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StoreError::ReadFailed(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::WriteFailed(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| StoreError::WriteFailed(format!("{:?}", e)))
    }
}

/// Login over `fetch`
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

impl LoginTransport for FetchTransport {
    async fn post(&self, url: &str) -> Result<LoginReply, LoginError> {
        let response = Request::post(url)
            .send()
            .await
            .map_err(|e| LoginError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| LoginError::Transport(e.to_string()))?;

        Ok(LoginReply { status, body })
    }
}

/// Add or remove a class on `<body>`
pub fn set_body_class(class: &str, enabled: bool) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let Some(body) = document.body() {
                let class_list = body.class_list();
                if enabled {
                    let _ = class_list.add_1(class);
                } else {
                    let _ = class_list.remove_1(class);
                }
            }
        }
    }
}

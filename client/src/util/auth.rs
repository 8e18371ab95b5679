//! Bearer token access.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sign-in happens in the external identity flow, which leaves the token in
//! `localStorage["token"]`. The client only reads it; every request picks it
//! up fresh so a token written in another tab is used on the next call.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// `localStorage` key holding the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Current bearer token, if one is stored.
pub fn read_token() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        normalize_token(storage.get_item(TOKEN_KEY).ok().flatten())
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Whether a request would carry credentials.
pub fn has_session() -> bool {
    read_token().is_some()
}

#[cfg(any(test, feature = "csr"))]
fn normalize_token(raw: Option<String>) -> Option<String> {
    let token = raw?;
    let token = token.trim();
    (!token.is_empty() && token != "null" && token != "undefined").then(|| token.to_owned())
}

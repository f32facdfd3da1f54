//! Cookie access over `document.cookie`.
//!
//! Values are percent-encoded on write and decoded on read, so JSON payloads
//! (the cart) survive the cookie grammar. The header-string parsing is pure
//! and tested off-wasm.

use wasm_bindgen::JsCast;

use crate::core::error::StorageError;
use crate::utils::url::{decode_component, encode_component};

const SECONDS_PER_DAY: u32 = 86_400;

/// Read a cookie by name.
///
/// Returns `None` if the cookie jar is unavailable or the name is absent.
pub fn get(name: &str) -> Option<String> {
    let header = html_document()?.cookie().ok()?;
    find_in_header(&header, name)
}

/// Write a cookie with the given lifetime.
pub fn set(name: &str, value: &str, max_age_days: u32) -> Result<(), StorageError> {
    let document = html_document().ok_or(StorageError::Unavailable)?;
    let cookie = build_set_cookie(name, value, max_age_days * SECONDS_PER_DAY);
    document
        .set_cookie(&cookie)
        .map_err(|_| StorageError::SaveFailed)
}

/// Remove a cookie by name (sets `Max-Age=0`).
pub fn remove(name: &str) -> Result<(), StorageError> {
    let document = html_document().ok_or(StorageError::Unavailable)?;
    let cookie = build_set_cookie(name, "", 0);
    document
        .set_cookie(&cookie)
        .map_err(|_| StorageError::RemoveFailed)
}

fn html_document() -> Option<web_sys::HtmlDocument> {
    web_sys::window()?
        .document()?
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()
}

/// Find a cookie's decoded value in a `document.cookie` header string.
fn find_in_header(header: &str, name: &str) -> Option<String> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then(|| decode_component(value))
    })
}

/// Build a `document.cookie` assignment string.
fn build_set_cookie(name: &str, value: &str, max_age_seconds: u32) -> String {
    format!(
        "{}={}; Max-Age={}; Path=/; SameSite=Lax",
        name,
        encode_component(value),
        max_age_seconds
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_in_header() {
        let header = "theme=dark; cart=%5B%5D; lang=en";
        assert_eq!(find_in_header(header, "cart"), Some("[]".to_string()));
        assert_eq!(find_in_header(header, "theme"), Some("dark".to_string()));
        assert_eq!(find_in_header(header, "missing"), None);
    }

    #[test]
    fn test_find_in_header_exact_name_match() {
        // "cart2" must not match "cart"
        let header = "cart2=other; cart=value";
        assert_eq!(find_in_header(header, "cart"), Some("value".to_string()));
        assert_eq!(find_in_header(header, "cart2"), Some("other".to_string()));
    }

    #[test]
    fn test_find_in_header_empty() {
        assert_eq!(find_in_header("", "cart"), None);
    }

    #[test]
    fn test_build_set_cookie() {
        assert_eq!(
            build_set_cookie("cart", "[]", 2_592_000),
            "cart=%5B%5D; Max-Age=2592000; Path=/; SameSite=Lax"
        );
        // Removal form
        assert_eq!(
            build_set_cookie("cart", "", 0),
            "cart=; Max-Age=0; Path=/; SameSite=Lax"
        );
    }

    #[test]
    fn test_header_round_trip() {
        let value = r#"[{"slug":"red-beets","quantity":2}]"#;
        let cookie = build_set_cookie("cart", value, 60);
        let header = cookie.split(';').next().unwrap().to_string();
        assert_eq!(find_in_header(&header, "cart"), Some(value.to_string()));
    }
}

//! Browser Session
//!
//! Tokens and the one-shot flash status live in local storage. The
//! `authtoken` cookie is read from and written to `document.cookie`.

use helium::api::TokenPair;
use helium::environment::Environment;
use helium::flows::Flash;
use helium::session::{
    self, CookieJar, CookieOptions, ACCESS_TOKEN_EXP_KEY, ACCESS_TOKEN_KEY, AUTH_TOKEN_COOKIE,
    REFRESH_TOKEN_KEY, STATUS_MSG_KEY, STATUS_TYPE_KEY,
};
use wasm_bindgen::JsCast;
use web_sys::{HtmlDocument, Storage};

fn storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// A non-empty local storage value
pub fn get_item(key: &str) -> Option<String> {
    storage()?
        .get_item(key)
        .ok()
        .flatten()
        .filter(|value| !value.is_empty())
}

pub fn set_item(key: &str, value: &str) {
    if let Some(storage) = storage() {
        let _ = storage.set_item(key, value);
    }
}

pub fn remove_item(key: &str) {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(key);
    }
}

fn html_document() -> Option<HtmlDocument> {
    web_sys::window()?
        .document()?
        .dyn_into::<HtmlDocument>()
        .ok()
}

/// Cookies visible to the page
pub fn cookies() -> CookieJar {
    html_document()
        .and_then(|doc| doc.cookie().ok())
        .map(|header| CookieJar::parse(&header))
        .unwrap_or_default()
}

fn write_cookie(assignment: &str) {
    if let Some(doc) = html_document() {
        if let Err(e) = doc.set_cookie(assignment) {
            web_sys::console::error_1(&format!("Failed to write cookie: {:?}", e).into());
        }
    }
}

pub fn access_token() -> Option<String> {
    get_item(ACCESS_TOKEN_KEY)
}

pub fn refresh_token() -> Option<String> {
    get_item(REFRESH_TOKEN_KEY)
}

/// Expiry of the stored access token (unix seconds)
pub fn access_token_exp() -> Option<i64> {
    get_item(ACCESS_TOKEN_EXP_KEY)?.parse().ok()
}

/// Persist a fresh token pair and mark the browser as signed in
pub fn store_tokens(tokens: &TokenPair, environment: Environment) {
    set_item(ACCESS_TOKEN_KEY, &tokens.access);
    set_item(REFRESH_TOKEN_KEY, &tokens.refresh);

    match session::parse_jwt_claims(&tokens.access) {
        Ok(claims) => set_item(ACCESS_TOKEN_EXP_KEY, &claims.exp.to_string()),
        Err(e) => {
            web_sys::console::warn_1(&format!("Access token not decodable: {}", e).into());
            remove_item(ACCESS_TOKEN_EXP_KEY);
        }
    }

    write_cookie(&session::set_cookie(
        AUTH_TOKEN_COOKIE,
        &tokens.access,
        &CookieOptions::for_environment(environment),
    ));
}

pub fn clear_tokens() {
    remove_item(ACCESS_TOKEN_KEY);
    remove_item(REFRESH_TOKEN_KEY);
    remove_item(ACCESS_TOKEN_EXP_KEY);
    write_cookie(&session::delete_cookie(AUTH_TOKEN_COOKIE, "/"));
}

/// Leave a status for the next page
pub fn store_flash(flash: &Flash) {
    set_item(STATUS_TYPE_KEY, flash.kind.name());
    set_item(STATUS_MSG_KEY, &flash.message);
}

/// Read and consume the pending flash status
pub fn take_flash() -> Option<Flash> {
    let kind = get_item(STATUS_TYPE_KEY);
    let message = get_item(STATUS_MSG_KEY);
    remove_item(STATUS_TYPE_KEY);
    remove_item(STATUS_MSG_KEY);
    Flash::from_stored(kind.as_deref(), message.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use helium::flows::StatusKind;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn flash_is_consumed_once() {
        store_flash(&Flash {
            kind: StatusKind::Info,
            message: "Verified".into(),
        });

        let flash = take_flash().unwrap();
        assert_eq!(flash.kind, StatusKind::Info);
        assert_eq!(flash.message, "Verified");
        assert!(take_flash().is_none());
    }

    #[wasm_bindgen_test]
    fn tokens_round_trip_through_storage() {
        let tokens = TokenPair {
            access: "not-a-jwt".into(),
            refresh: "r1".into(),
        };
        store_tokens(&tokens, Environment::Local);
        assert_eq!(access_token().as_deref(), Some("not-a-jwt"));
        assert_eq!(refresh_token().as_deref(), Some("r1"));
        assert!(access_token_exp().is_none());
        assert!(cookies().is_authenticated());

        clear_tokens();
        assert!(access_token().is_none());
        assert!(refresh_token().is_none());
        assert!(!cookies().is_authenticated());
    }
}

use wasm_bindgen::JsCast;
use web_sys::{window, HtmlDocument, HtmlInputElement};
use crate::config;

/// CSRF token rendered by the backend, taken from the hidden form field when
/// the page has one and from the cookie otherwise.
pub fn read_csrf_token() -> Option<String> {
    let document = window()?.document()?;

    let from_field = document
        .query_selector(&format!("input[name=\"{}\"]", config::CSRF_FIELD_NAME))
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .filter(|value| !value.is_empty());
    if from_field.is_some() {
        return from_field;
    }

    let cookies = document.dyn_into::<HtmlDocument>().ok()?.cookie().ok()?;
    cookie_value(&cookies, config::CSRF_COOKIE_NAME)
}

pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .and_then(|(_, value)| urlencoding::decode(value).ok())
        .map(|value| value.into_owned())
        .filter(|value| !value.is_empty())
}

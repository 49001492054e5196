//! JavaScript boundary: the EmailJS SDK, `fetch`, `matchMedia` and the
//! scroll metrics of the document.

use crate::dto::{EmailJsFailure, EmailJsOptions};
use js_sys::{Array, Function, Promise, Reflect};
use portfolio_core::{
    asset_links, parse_manifest, AssetLink, ContactMessage, DeliveryError, EmailConfig,
    EmailSender, ManifestError,
};
use serde::Serialize;
use std::future::Future;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

fn emailjs_fn() -> Result<(JsValue, Function), String> {
    let window = web_sys::window().ok_or_else(|| "window not available".to_string())?;
    let sdk = Reflect::get(&window, &JsValue::from_str("emailjs"))
        .map_err(|_| "failed to access emailjs".to_string())?;
    if sdk.is_undefined() || sdk.is_null() {
        return Err("EmailJS SDK not loaded".into());
    }

    let send = Reflect::get(&sdk, &JsValue::from_str("send"))
        .map_err(|_| "failed to access emailjs.send".to_string())?;
    if !send.is_function() {
        return Err("emailjs.send is not a function".into());
    }
    Ok((sdk, send.unchecked_into::<Function>()))
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, String> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| e.to_string())
}

fn describe_rejection(err: JsValue) -> String {
    match serde_wasm_bindgen::from_value::<EmailJsFailure>(err.clone()) {
        Ok(failure) => format!("{} {}", failure.status, failure.text),
        Err(_) => format!("{err:?}"),
    }
}

async fn call_send(
    sdk: &JsValue,
    send: &Function,
    config: &EmailConfig,
    message: &ContactMessage,
) -> Result<(), String> {
    let args = Array::of4(
        &JsValue::from_str(&config.service_id),
        &JsValue::from_str(&config.template_id),
        &to_js(message)?,
        &to_js(&EmailJsOptions {
            public_key: config.public_key.clone(),
        })?,
    );
    let js = send
        .apply(sdk, &args)
        .map_err(|e| format!("emailjs.send threw: {e:?}"))?;
    JsFuture::from(Promise::from(js))
        .await
        .map_err(describe_rejection)?;
    Ok(())
}

/// Delivers contact messages through the EmailJS browser SDK loaded by the
/// host page.
#[derive(Clone, Debug)]
pub struct EmailJsSender {
    config: EmailConfig,
}

impl EmailJsSender {
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }
}

impl EmailSender for EmailJsSender {
    fn send(&self, message: &ContactMessage) -> impl Future<Output = Result<(), DeliveryError>> {
        let config = self.config.clone();
        let message = message.clone();
        async move {
            let (sdk, send) = emailjs_fn().map_err(DeliveryError::Unavailable)?;
            call_send(&sdk, &send, &config, &message)
                .await
                .map_err(DeliveryError::Rejected)
        }
    }
}

pub async fn fetch_text(url: &str) -> Result<String, String> {
    let window = web_sys::window().ok_or_else(|| "window not available".to_string())?;
    let resp = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| format!("fetch failed: {e:?}"))?;
    let resp: web_sys::Response = resp
        .dyn_into()
        .map_err(|_| "fetch did not resolve to a Response".to_string())?;
    if !resp.ok() {
        return Err(format!("HTTP {} for {url}", resp.status()));
    }
    let body = resp.text().map_err(|e| format!("body unavailable: {e:?}"))?;
    let text = JsFuture::from(body)
        .await
        .map_err(|e| format!("body read failed: {e:?}"))?;
    text.as_string()
        .ok_or_else(|| "response body is not text".to_string())
}

pub async fn load_manifest(url: &str, base: &str) -> Result<Vec<AssetLink>, ManifestError> {
    let body = fetch_text(url).await.map_err(ManifestError::Fetch)?;
    let files = parse_manifest(&body)?;
    Ok(asset_links(base, &files))
}

/// One-shot read of the ambient colour-scheme preference.
pub fn prefers_light() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: light)").ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// Current scroll position as a fraction of the scrollable height.
pub fn scroll_fraction() -> f64 {
    let Some(window) = web_sys::window() else {
        return 0.0;
    };
    let top = window.scroll_y().unwrap_or(0.0);
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|el| f64::from(el.scroll_height()))
        .unwrap_or(0.0);
    portfolio_core::scroll::progress(top, height, viewport)
}

pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

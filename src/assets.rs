use crate::typeface::Typeface;
use anyhow::{anyhow, bail};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

fn js_err(e: JsValue) -> anyhow::Error {
    anyhow!("{:?}", e)
}

/// Fetch and parse the typeface description file. The scene populates only
/// once this resolves; a failure leaves the page carousel-only.
pub async fn load_typeface(url: &str) -> anyhow::Result<Typeface> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let response: web::Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;
    if !response.ok() {
        bail!("typeface fetch failed: HTTP {}", response.status());
    }
    let text = JsFuture::from(response.text().map_err(js_err)?)
        .await
        .map_err(js_err)?
        .as_string()
        .ok_or_else(|| anyhow!("typeface body is not text"))?;
    let typeface = Typeface::from_json(&text)?;
    log::info!(
        "typeface loaded: {} glyphs ({})",
        typeface.glyphs.len(),
        typeface.family_name
    );
    Ok(typeface)
}

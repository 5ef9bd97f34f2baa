use crate::objects::{DirectoryConfig, JsError};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

pub const CONFIG_ELEMENT_ID: &str = "directory-config";

pub fn window() -> Result<web_sys::Window, JsError> {
    web_sys::window().ok_or_else(|| "error getting window".into())
}

/// Reads the optional JSON config embedded in the host page.
pub fn read_config() -> Result<Option<DirectoryConfig>, JsError> {
    let document = window()?
        .document()
        .ok_or(JsError::from("error getting document"))?;

    match document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|elem| elem.text_content())
    {
        Some(json) => Ok(Some(DirectoryConfig::from_json(&json)?)),
        None => Ok(None),
    }
}

pub async fn write_clipboard(text: &str) -> Result<(), JsError> {
    let navigator = window()?.navigator();
    let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))?;

    if clipboard.is_undefined() {
        return Err("clipboard not available".into());
    }

    let write_text: js_sys::Function =
        js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))?.dyn_into()?;
    let promise: js_sys::Promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))?
        .dyn_into()?;

    JsFuture::from(promise).await?;

    Ok(())
}

pub fn open(url: &str, target: &str) -> Result<(), JsError> {
    window()?.open_with_url_and_target(url, target)?;

    Ok(())
}

pub fn alert(message: &str) -> Result<(), JsError> {
    window()?.alert_with_message(message)?;

    Ok(())
}

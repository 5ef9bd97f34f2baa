use std::{error::Error, fmt::Display};

/// Failure raised while talking to the browser or decoding a backend payload.
#[derive(Debug, Clone, PartialEq)]
pub struct JsError {
    pub description: String,
}

impl Error for JsError {}

impl Display for JsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}", self.description))
    }
}

impl From<wasm_bindgen::JsValue> for JsError {
    fn from(val: wasm_bindgen::JsValue) -> Self {
        Self {
            description: match val.as_string() {
                Some(description) => description,
                None => format!("{:?}", val),
            },
        }
    }
}

impl From<serde_wasm_bindgen::Error> for JsError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        Self {
            description: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for JsError {
    fn from(err: serde_json::Error) -> Self {
        Self {
            description: err.to_string(),
        }
    }
}

impl From<&str> for JsError {
    fn from(str: &str) -> Self {
        Self {
            description: String::from(str),
        }
    }
}

impl From<String> for JsError {
    fn from(description: String) -> Self {
        Self { description }
    }
}

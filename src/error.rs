use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while building or tearing down the page.
///
/// The placement math itself never fails; these only come from the DOM side.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PageError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("dom: {0}")]
    Dom(String),
    #[error("config: {0}")]
    Config(String),
}

impl From<JsValue> for PageError {
    fn from(v: JsValue) -> Self {
        PageError::Dom(v.as_string().unwrap_or_else(|| format!("{:?}", v)))
    }
}

impl From<PageError> for JsValue {
    fn from(e: PageError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(PageError::NoWindow.to_string(), "no window");
        assert_eq!(PageError::Config("bad".into()).to_string(), "config: bad");
    }
}

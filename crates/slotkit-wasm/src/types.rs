//! Conversion between JavaScript values and core Slotkit types.
//!
//! Structured arguments arrive as plain JS objects and are deserialized with
//! serde. Results are serialized with the JSON-compatible serializer so that
//! maps become plain objects rather than `Map` instances.

use serde::de::DeserializeOwned;
use serde::Serialize;
use slotkit_core::TransformContext;
use wasm_bindgen::prelude::*;

use crate::log;

/// Deserialize a JS argument, labelling the error with what was expected.
pub(crate) fn from_js<T: DeserializeOwned>(value: JsValue, what: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let message = invalid_argument(what, &e.to_string());
        log::warn(&message);
        JsValue::from_str(&message)
    })
}

/// Deserialize an optional JS argument; `undefined` and `null` yield the default.
pub(crate) fn from_js_or_default<T: DeserializeOwned + Default>(
    value: JsValue,
    what: &str,
) -> Result<T, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    from_js(value, what)
}

/// Serialize a result into a plain JS value.
pub(crate) fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Deserialize the selection and context shared by every multi-slot binding.
pub(crate) fn selection_from_js(
    names: JsValue,
    ctx: JsValue,
) -> Result<(Vec<String>, TransformContext), JsValue> {
    let names: Vec<String> = from_js(names, "slot names")?;
    let ctx: TransformContext = from_js(ctx, "transform context")?;
    Ok((names, ctx))
}

/// Parse a toolbar mode string into a core enum.
pub(crate) fn parse_mode<T>(value: &str) -> Result<T, JsValue>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.parse::<T>().map_err(|e| {
        let message = e.to_string();
        log::warn(&message);
        JsValue::from_str(&message)
    })
}

pub(crate) fn invalid_argument(what: &str, reason: &str) -> String {
    format!("Invalid {}: {}", what, reason)
}

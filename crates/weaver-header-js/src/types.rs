//! Types exposed to JavaScript via wasm-bindgen.

use serde::{Deserialize, Serialize};
use tsify_next::Tsify;
use wasm_bindgen::prelude::*;

use weaver_header_core::HeaderData;

/// Saved header block data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub struct JsHeaderData {
    /// Heading content as HTML.
    pub text: String,
    /// Heading level, 1 to 6.
    pub level: u8,
}

impl From<HeaderData> for JsHeaderData {
    fn from(data: HeaderData) -> Self {
        Self {
            text: data.text,
            level: data.level.get(),
        }
    }
}

//! WASM bindings for resume field extraction.
//!
//! The browser decodes the upload itself and passes plain text in; results
//! come back as plain JS objects.

use std::sync::Arc;

use wasm_bindgen::prelude::*;

use skilllens_core::{
    normalize, ResumeExtractor as _, ResumeParser, SkillEntry, SkillStrategy, SkillVocabulary,
};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Extract email, phone, name and skills from resume text.
#[wasm_bindgen]
pub fn extract_fields(text: &str) -> Result<JsValue, JsValue> {
    to_js(&skilllens_core::extract_fields(text))
}

/// Collapse whitespace and strip NUL characters.
#[wasm_bindgen]
pub fn normalize_text(text: &str) -> String {
    normalize(text)
}

/// Resume extractor class for browser use.
#[wasm_bindgen]
pub struct ResumeExtractor {
    parser: ResumeParser,
}

#[wasm_bindgen]
impl ResumeExtractor {
    /// Create an extractor with the built-in skill list.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            parser: ResumeParser::new(),
        }
    }

    /// Replace the skill list.
    ///
    /// Accepts an array of names or `{ name, aliases }` objects.
    #[wasm_bindgen]
    pub fn with_skills(self, skills: JsValue) -> Result<ResumeExtractor, JsValue> {
        let entries: Vec<SkillEntry> = serde_wasm_bindgen::from_value(skills)?;
        let vocabulary = SkillVocabulary::new(entries).map_err(to_js_error)?;

        Ok(Self {
            parser: self.parser.with_vocabulary(Arc::new(vocabulary)),
        })
    }

    /// Choose where skills are looked for: "section" or "document".
    #[wasm_bindgen]
    pub fn set_skill_strategy(&mut self, strategy: &str) -> Result<(), JsValue> {
        let strategy: SkillStrategy = strategy.parse().map_err(|e: String| JsValue::from_str(&e))?;
        self.parser = self.parser.clone().with_skill_strategy(strategy);
        Ok(())
    }

    /// Extract fields from text.
    #[wasm_bindgen]
    pub fn extract(&self, text: &str) -> Result<JsValue, JsValue> {
        to_js(&self.parser.extract_fields(text))
    }

    /// Extract fields plus missing-field list and timing.
    #[wasm_bindgen]
    pub fn extract_with_report(&self, text: &str) -> Result<JsValue, JsValue> {
        to_js(&self.parser.parse(text))
    }

    /// The skill list in use.
    #[wasm_bindgen]
    pub fn skills(&self) -> Result<JsValue, JsValue> {
        to_js(&self.parser.vocabulary().entries())
    }
}

impl Default for ResumeExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

//! Page-supplied configuration.
//!
//! The page may carry `<script type="application/json" id="folio-config">`
//! with a partial [`MotionConfig`] object. Absence is normal and yields the
//! defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use motion::config::{ConfigError, MotionConfig};

/// Id of the script element holding the JSON overrides.
pub const CONFIG_ELEMENT_ID: &str = "folio-config";

/// Parse raw script text; blank text means "no overrides".
pub fn parse(raw: Option<&str>) -> Result<Option<MotionConfig>, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(json) => MotionConfig::from_json(json).map(Some),
    }
}

/// Read overrides from the page.
pub fn read() -> Result<Option<MotionConfig>, ConfigError> {
    #[cfg(feature = "hydrate")]
    {
        let raw = crate::util::dom::by_id(CONFIG_ELEMENT_ID).ok().and_then(|el| el.text_content());
        parse(raw.as_deref())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        parse(None)
    }
}

use serde::{Deserialize, Serialize};
use strum::Display;

/// One photo the user is preparing for upload.
///
/// Delivered by the server page under `window.ENV.PHOTOS`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct PhotoInfo {
    pub id: String,

    /// Suggested title (the Flickr title), without extension.
    #[serde(default)]
    pub title: String,

    /// Extension of the original file, e.g. `jpg`.
    pub original_format: String,

    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

/// Result codes emitted by the title-validation service.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub(crate) enum ValidationResult {
    Ok,
    Duplicate,
    Blacklisted,
    TooLong,
    Invalid,
    #[serde(other)]
    Other,
}

/// Response body of `GET /api/validate_title`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct TitleValidation {
    pub result: ValidationResult,

    /// HTML-safe explanation; present for every non-`ok` result.
    #[serde(default)]
    pub text: Option<String>,
}

impl TitleValidation {
    pub fn is_ok(&self) -> bool {
        self.result == ValidationResult::Ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_validation_ok_contract_deserialize() {
        let parsed: TitleValidation =
            serde_json::from_str(r#"{"result": "ok"}"#).expect("ok response should parse");
        assert!(parsed.is_ok());
        assert!(parsed.text.is_none());
    }

    #[test]
    fn test_title_validation_duplicate_contract_deserialize() {
        let json = r#"{
            "result": "duplicate",
            "text": "Please choose a different title. There is already <a href='https://commons.wikimedia.org/wiki/File:P1.jpg'>a file on Commons</a> with that title."
        }"#;
        let parsed: TitleValidation =
            serde_json::from_str(json).expect("duplicate response should parse");
        assert_eq!(parsed.result, ValidationResult::Duplicate);
        assert!(!parsed.is_ok());
        assert!(parsed
            .text
            .as_deref()
            .is_some_and(|t| t.starts_with("Please choose a different title.")));
    }

    #[test]
    fn test_title_validation_unknown_result_is_not_ok() {
        let parsed: TitleValidation =
            serde_json::from_str(r#"{"result": "rate_limited", "text": "Slow down."}"#)
                .expect("unknown result should still parse");
        assert_eq!(parsed.result, ValidationResult::Other);
        assert!(!parsed.is_ok());
    }

    #[test]
    fn test_validation_result_display_matches_wire_name() {
        assert_eq!(ValidationResult::TooLong.to_string(), "too_long");
        assert_eq!(ValidationResult::Blacklisted.to_string(), "blacklisted");
    }

    #[test]
    fn test_photo_info_optional_fields_default() {
        let parsed: PhotoInfo =
            serde_json::from_str(r#"{"id": "53404417215", "original_format": "jpg"}"#)
                .expect("photo should parse");
        assert_eq!(parsed.title, "");
        assert!(parsed.thumbnail_url.is_none());
    }
}

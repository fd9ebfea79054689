//! Localized content block domain model.
//!
//! A content block is an editable piece of site copy addressed by a semantic
//! key (`founder_bio`, `mission_statement`) and a locale tag. The pair
//! `(key, locale)` identifies at most one block.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Locale used when a request does not name one.
pub const DEFAULT_LOCALE: &str = "en";

/// Represents a content block in the system.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContentBlock {
    pub id: i32,
    pub key: String,
    pub title: String,
    pub body: String,
    pub image_url: String,
    pub sort_order: i32,
    pub locale: String,
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

/// Request payload for creating a content block.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateContentBlockRequest {
    #[validate(custom(function = "shared::validation::validate_content_key"))]
    pub key: String,

    #[serde(default)]
    #[validate(length(max = 500, message = "Title must be at most 500 characters"))]
    pub title: String,

    #[serde(default)]
    pub body: String,

    #[serde(default)]
    #[validate(length(max = 2048, message = "Image URL must be at most 2048 characters"))]
    pub image_url: String,

    #[serde(default)]
    pub sort_order: i32,

    #[serde(default = "default_locale")]
    #[validate(custom(function = "shared::validation::validate_locale"))]
    pub locale: String,
}

/// Partial update for a content block.
///
/// Absent fields and explicit `null`s both leave the stored value untouched.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContentBlockRequest {
    #[validate(length(max = 500, message = "Title must be at most 500 characters"))]
    pub title: Option<String>,

    pub body: Option<String>,

    #[validate(length(max = 2048, message = "Image URL must be at most 2048 characters"))]
    pub image_url: Option<String>,

    pub sort_order: Option<i32>,
}

impl UpdateContentBlockRequest {
    /// Returns true when no field would change.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.body.is_none()
            && self.image_url.is_none()
            && self.sort_order.is_none()
    }
}

/// `?locale=` query parameter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocaleQuery {
    pub locale: Option<String>,
}

impl LocaleQuery {
    /// The requested locale, falling back to `en` when missing or empty.
    pub fn locale(&self) -> &str {
        match self.locale.as_deref() {
            Some(l) if !l.trim().is_empty() => l,
            _ => DEFAULT_LOCALE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn block() -> ContentBlock {
        ContentBlock {
            id: 3,
            key: "founder_bio".to_string(),
            title: "Our Founder".to_string(),
            body: "Bio".to_string(),
            image_url: String::new(),
            sort_order: 1,
            locale: "en".to_string(),
            updated_at: None,
        }
    }

    #[test]
    fn test_content_block_serializes_camel_case() {
        let json = serde_json::to_value(block()).unwrap();
        assert_eq!(json["imageUrl"], "");
        assert_eq!(json["sortOrder"], 1);
        assert_eq!(json["locale"], "en");
        assert!(json.get("image_url").is_none());
    }

    #[test]
    fn test_null_updated_at_is_serialized() {
        let json = serde_json::to_value(block()).unwrap();
        assert!(json.as_object().unwrap().contains_key("updatedAt"));
        assert!(json["updatedAt"].is_null());

        let mut b = block();
        b.updated_at = Some(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap());
        let json = serde_json::to_value(b).unwrap();
        assert_eq!(json["updatedAt"], "2024-05-01T12:00:00Z");
    }

    #[test]
    fn test_create_request_defaults() {
        let req: CreateContentBlockRequest =
            serde_json::from_str(r#"{"key": "mission_statement"}"#).unwrap();
        assert_eq!(req.key, "mission_statement");
        assert_eq!(req.title, "");
        assert_eq!(req.body, "");
        assert_eq!(req.image_url, "");
        assert_eq!(req.sort_order, 0);
        assert_eq!(req.locale, "en");
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_create_request_requires_key() {
        let result: Result<CreateContentBlockRequest, _> =
            serde_json::from_str(r#"{"title": "x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_create_request_rejects_bad_key_and_locale() {
        let req: CreateContentBlockRequest =
            serde_json::from_str(r#"{"key": "Bad Key", "locale": "en_US"}"#).unwrap();
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("key"));
        assert!(fields.contains_key("locale"));
    }

    #[test]
    fn test_update_request_null_and_absent_are_none() {
        let req: UpdateContentBlockRequest =
            serde_json::from_str(r#"{"title": null, "sortOrder": 7}"#).unwrap();
        assert!(req.title.is_none());
        assert!(req.body.is_none());
        assert_eq!(req.sort_order, Some(7));
        assert!(!req.is_empty());

        let empty: UpdateContentBlockRequest = serde_json::from_str("{}").unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_update_request_keeps_empty_string() {
        let req: UpdateContentBlockRequest =
            serde_json::from_str(r#"{"imageUrl": ""}"#).unwrap();
        assert_eq!(req.image_url.as_deref(), Some(""));
    }

    #[test]
    fn test_locale_query_fallback() {
        assert_eq!(LocaleQuery::default().locale(), "en");
        assert_eq!(
            LocaleQuery {
                locale: Some(String::new())
            }
            .locale(),
            "en"
        );
        assert_eq!(
            LocaleQuery {
                locale: Some("zh".to_string())
            }
            .locale(),
            "zh"
        );
    }
}

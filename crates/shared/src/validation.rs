//! Common validation utilities.

use validator::ValidationError;

/// Maximum length of a content key.
pub const MAX_KEY_LENGTH: usize = 100;

lazy_static::lazy_static! {
    /// Content keys are lowercase slugs such as `founder_bio` or `home-hero`.
    pub static ref CONTENT_KEY_REGEX: regex::Regex =
        regex::Regex::new(r"^[a-z0-9][a-z0-9_-]*$").unwrap();

    /// Language tags: a primary subtag plus optional subtags (`en`, `zh-Hant`, `pt-BR`).
    pub static ref LOCALE_REGEX: regex::Regex =
        regex::Regex::new(r"^[a-zA-Z]{2,8}(-[a-zA-Z0-9]{1,8})*$").unwrap();
}

/// Validates a content block key.
pub fn validate_content_key(key: &str) -> Result<(), ValidationError> {
    if key.len() <= MAX_KEY_LENGTH && CONTENT_KEY_REGEX.is_match(key) {
        Ok(())
    } else {
        let mut err = ValidationError::new("content_key");
        err.message = Some(
            "Key must be a lowercase slug (letters, digits, '_' or '-') of at most 100 characters"
                .into(),
        );
        Err(err)
    }
}

/// Validates a locale tag.
pub fn validate_locale(locale: &str) -> Result<(), ValidationError> {
    if locale.len() <= 35 && LOCALE_REGEX.is_match(locale) {
        Ok(())
    } else {
        let mut err = ValidationError::new("locale");
        err.message = Some("Locale must be a language tag such as 'en' or 'zh-CN'".into());
        Err(err)
    }
}

/// Rejects strings that are empty or only whitespace.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("Value must not be blank".into());
        Err(err)
    } else {
        Ok(())
    }
}

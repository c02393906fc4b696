use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ConfigInvalidJson,
    ConfigInvalidValue,

    ValidationMissingArgument,
    ValidationInvalidArgument,
    ValidationInvalidJson,

    SlugEmpty,
    SlugInvalid,
    SlugReserved,
    SlugTooLong,
    SlugCollision,

    InternalIoError,
    InternalJsonError,
    InternalUnexpected,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ConfigInvalidJson => "config.invalid_json",
            ErrorCode::ConfigInvalidValue => "config.invalid_value",

            ErrorCode::ValidationMissingArgument => "validation.missing_argument",
            ErrorCode::ValidationInvalidArgument => "validation.invalid_argument",
            ErrorCode::ValidationInvalidJson => "validation.invalid_json",

            ErrorCode::SlugEmpty => "slug.empty",
            ErrorCode::SlugInvalid => "slug.invalid",
            ErrorCode::SlugReserved => "slug.reserved",
            ErrorCode::SlugTooLong => "slug.too_long",
            ErrorCode::SlugCollision => "slug.collision",

            ErrorCode::InternalIoError => "internal.io_error",
            ErrorCode::InternalJsonError => "internal.json_error",
            ErrorCode::InternalUnexpected => "internal.unexpected",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Hint {
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigInvalidJsonDetails {
    pub path: String,
    pub error: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigInvalidValueDetails {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub problem: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingArgumentDetails {
    pub args: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidArgumentDetails {
    pub field: String,
    pub problem: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tried: Option<Vec<String>>,
}

/// Details shared by every `slug.*` error.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlugDetails {
    pub field: String,
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attempts: Option<usize>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalIoErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalJsonErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    pub details: Value,
    pub hints: Vec<Hint>,
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

fn to_details<T: Serialize>(details: T) -> Value {
    serde_json::to_value(details).unwrap_or_else(|_| Value::Object(serde_json::Map::new()))
}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
            hints: Vec::new(),
        }
    }

    pub fn validation_missing_argument(args: Vec<String>) -> Self {
        Self::new(
            ErrorCode::ValidationMissingArgument,
            "Missing required argument",
            to_details(MissingArgumentDetails { args }),
        )
    }

    pub fn validation_invalid_argument(
        field: impl Into<String>,
        problem: impl Into<String>,
        id: Option<String>,
        tried: Option<Vec<String>>,
    ) -> Self {
        let details = to_details(InvalidArgumentDetails {
            field: field.into(),
            problem: problem.into(),
            id,
            tried,
        });

        Self::new(
            ErrorCode::ValidationInvalidArgument,
            "Invalid argument",
            details,
        )
    }

    pub fn validation_invalid_json(err: serde_json::Error, context: Option<String>) -> Self {
        let details = serde_json::json!({
            "error": err.to_string(),
            "context": context,
        });

        Self::new(ErrorCode::ValidationInvalidJson, "Invalid JSON", details)
    }

    pub fn slug_empty(field: impl Into<String>, input: impl Into<String>) -> Self {
        let field = field.into();
        let message = format!(
            "{} must contain at least one letter or number",
            capitalize(&field)
        );
        Self::new(
            ErrorCode::SlugEmpty,
            message,
            to_details(SlugDetails {
                field,
                input: input.into(),
                slug: None,
                max_length: None,
                attempts: None,
            }),
        )
    }

    pub fn slug_invalid(
        field: impl Into<String>,
        input: impl Into<String>,
        suggestion: Option<String>,
    ) -> Self {
        let field = field.into();
        let message = format!(
            "{} must be lowercase letters and numbers separated by single hyphens",
            capitalize(&field)
        );
        let err = Self::new(
            ErrorCode::SlugInvalid,
            message,
            to_details(SlugDetails {
                field,
                input: input.into(),
                slug: suggestion.clone(),
                max_length: None,
                attempts: None,
            }),
        );

        match suggestion {
            Some(s) => err.with_hint(format!("Did you mean '{}'?", s)),
            None => err,
        }
    }

    pub fn slug_reserved(
        field: impl Into<String>,
        input: impl Into<String>,
        slug: impl Into<String>,
    ) -> Self {
        let field = field.into();
        let slug = slug.into();
        let message = format!("{} '{}' is reserved", capitalize(&field), slug);
        Self::new(
            ErrorCode::SlugReserved,
            message,
            to_details(SlugDetails {
                field,
                input: input.into(),
                slug: Some(slug),
                max_length: None,
                attempts: None,
            }),
        )
        .with_hint("Choose a different name or remove it from defaults.slug.reserved")
    }

    pub fn slug_too_long(field: impl Into<String>, input: impl Into<String>, max: usize) -> Self {
        let field = field.into();
        let message = format!(
            "{} must be at most {} characters",
            capitalize(&field),
            max
        );
        Self::new(
            ErrorCode::SlugTooLong,
            message,
            to_details(SlugDetails {
                field,
                input: input.into(),
                slug: None,
                max_length: Some(max),
                attempts: None,
            }),
        )
    }

    pub fn slug_collision(
        field: impl Into<String>,
        input: impl Into<String>,
        slug: impl Into<String>,
        attempts: usize,
    ) -> Self {
        let field = field.into();
        let slug = slug.into();
        let message = format!(
            "No free {} derived from '{}' after {} attempts",
            field, slug, attempts
        );
        Self::new(
            ErrorCode::SlugCollision,
            message,
            to_details(SlugDetails {
                field,
                input: input.into(),
                slug: Some(slug),
                max_length: None,
                attempts: Some(attempts),
            }),
        )
    }

    pub fn config_invalid_json(path: impl Into<String>, err: serde_json::Error) -> Self {
        let details = to_details(ConfigInvalidJsonDetails {
            path: path.into(),
            error: err.to_string(),
        });

        Self::new(
            ErrorCode::ConfigInvalidJson,
            "Invalid JSON in configuration",
            details,
        )
    }

    pub fn config_invalid_value(
        key: impl Into<String>,
        value: Option<String>,
        problem: impl Into<String>,
    ) -> Self {
        let details = to_details(ConfigInvalidValueDetails {
            key: key.into(),
            value,
            problem: problem.into(),
        });

        Self::new(
            ErrorCode::ConfigInvalidValue,
            "Invalid configuration value",
            details,
        )
    }

    pub fn internal_io(error: impl Into<String>, context: Option<String>) -> Self {
        let details = to_details(InternalIoErrorDetails {
            error: error.into(),
            context,
        });

        Self::new(ErrorCode::InternalIoError, "IO error", details)
    }

    pub fn internal_json(error: impl Into<String>, context: Option<String>) -> Self {
        let details = to_details(InternalJsonErrorDetails {
            error: error.into(),
            context,
        });

        Self::new(ErrorCode::InternalJsonError, "JSON error", details)
    }

    pub fn internal_unexpected(error: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::InternalUnexpected,
            "Unexpected error",
            serde_json::json!({ "error": error.into() }),
        )
    }

    pub fn with_hint(mut self, message: impl Into<String>) -> Self {
        self.hints.push(Hint {
            message: message.into(),
        });
        self
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_use_dotted_names() {
        assert_eq!(ErrorCode::SlugEmpty.as_str(), "slug.empty");
        assert_eq!(ErrorCode::ConfigInvalidJson.as_str(), "config.invalid_json");
    }

    #[test]
    fn slug_empty_message_capitalizes_field() {
        let err = Error::slug_empty("name", "!!!");
        assert_eq!(err.message, "Name must contain at least one letter or number");
        assert_eq!(err.details["input"], "!!!");
    }

    #[test]
    fn slug_invalid_adds_hint_only_with_suggestion() {
        let with = Error::slug_invalid("slug", "Hello World", Some("hello-world".to_string()));
        assert_eq!(with.hints.len(), 1);
        assert!(with.hints[0].message.contains("hello-world"));

        let without = Error::slug_invalid("slug", "!!!", None);
        assert!(without.hints.is_empty());
        assert!(without.details.get("slug").is_none());
    }

    #[test]
    fn slug_too_long_records_limit() {
        let err = Error::slug_too_long("slug", "abcdef", 3);
        assert_eq!(err.details["maxLength"], 3);
    }
}

//! Json descriptor parsing and validation
//!
//! Descriptors are written by hand, so comments (`//`, `/* */`), trailing
//! commas and a leading byte order mark are tolerated. Validation runs in a fixed order and stops
//! at the first violated constraint:
//!
//! 1. `embed_version` - required integer, must be a supported version
//! 2. `internal_name` - required string, 1..=63 bytes
//! 3. `display_name` - optional string, <= 31 bytes, falls back to `internal_name`
//! 4. `author` - optional string, <= 63 bytes, falls back to `"N/A"`

use serde_json::{Map, Value};
use zobj_common::EmbeddedRecord;
use zobj_common::formats::{
    CURRENT_EMBED_VERSION, MAX_AUTHOR_NAME_LEN, MAX_DISPLAY_NAME_LEN, MAX_INTERNAL_NAME_LEN,
    truncate_to_boundary,
};

/// Author stored when the descriptor does not name one
pub const DEFAULT_AUTHOR: &str = "N/A";

/// Descriptor field names
pub const EMBED_VERSION_KEY: &str = "embed_version";
pub const INTERNAL_NAME_KEY: &str = "internal_name";
pub const DISPLAY_NAME_KEY: &str = "display_name";
pub const AUTHOR_KEY: &str = "author";

/// Validation error for descriptor contents
#[derive(Debug, thiserror::Error)]
pub enum DescriptorError {
    /// Malformed json (after comments and trailing commas are removed)
    #[error("failed to parse json: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("json root is not an object")]
    NotAnObject,

    /// `embed_version` absent or not an integer
    #[error("'embed_version' field is missing or not an integer")]
    VersionNotInteger,

    #[error("'embed_version' field is not a supported version: {found}\n(Currently supported versions: 1)")]
    UnsupportedVersion { found: serde_json::Number },

    #[error("json field '{field}' is missing")]
    MissingField { field: &'static str },

    #[error("json field '{field}' is not a string")]
    NotAString { field: &'static str },

    #[error("json field '{field}' is too big ({len} bytes)! Max size: {max}")]
    TooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },

    /// A zero byte would end the stored field early
    #[error("json field '{field}' cannot contain a null character")]
    ContainsNul { field: &'static str },

    #[error("'internal_name' cannot be empty")]
    EmptyInternalName,
}

/// Normalized descriptor values, each guaranteed to fit its record field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelInfo {
    pub internal_name: String,
    pub display_name: String,
    pub author: String,
}

impl ModelInfo {
    /// Build the binary record for these values
    pub fn to_record(&self) -> EmbeddedRecord {
        EmbeddedRecord::new(&self.internal_name, &self.display_name, &self.author)
    }
}

/// Parse descriptor text, tolerating comments and trailing commas.
pub fn parse_descriptor(text: &str) -> Result<Value, DescriptorError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let cleaned = strip_trailing_commas(&strip_comments(text.as_bytes()));
    Ok(serde_json::from_slice(&cleaned)?)
}

/// Parse and validate descriptor text in one step.
pub fn load_descriptor(text: &str) -> Result<ModelInfo, DescriptorError> {
    validate_descriptor(&parse_descriptor(text)?)
}

/// Check a parsed descriptor and apply the fallback defaults.
pub fn validate_descriptor(json: &Value) -> Result<ModelInfo, DescriptorError> {
    let object = json.as_object().ok_or(DescriptorError::NotAnObject)?;

    check_embed_version(object.get(EMBED_VERSION_KEY))?;

    let internal_name = required_string(object, INTERNAL_NAME_KEY, MAX_INTERNAL_NAME_LEN)?;
    if internal_name.is_empty() {
        return Err(DescriptorError::EmptyInternalName);
    }

    let display_name = match optional_string(object, DISPLAY_NAME_KEY, MAX_DISPLAY_NAME_LEN)? {
        Some(name) if !name.is_empty() => name,
        _ => {
            // The display field is half the width of the internal one
            let fallback = truncate_to_boundary(internal_name, MAX_DISPLAY_NAME_LEN);
            if fallback.len() < internal_name.len() {
                tracing::warn!(
                    "'internal_name' is longer than {} bytes, display name truncated to {:?}",
                    MAX_DISPLAY_NAME_LEN,
                    fallback
                );
            }
            fallback
        }
    };

    let author = match optional_string(object, AUTHOR_KEY, MAX_AUTHOR_NAME_LEN)? {
        Some(author) if !author.is_empty() => author,
        _ => DEFAULT_AUTHOR,
    };

    Ok(ModelInfo {
        internal_name: internal_name.to_string(),
        display_name: display_name.to_string(),
        author: author.to_string(),
    })
}

fn check_embed_version(value: Option<&Value>) -> Result<(), DescriptorError> {
    let number = match value {
        Some(Value::Number(n)) if n.is_i64() || n.is_u64() => n,
        _ => return Err(DescriptorError::VersionNotInteger),
    };
    let unsupported = || DescriptorError::UnsupportedVersion {
        found: number.clone(),
    };

    // Must fit the record's version byte
    let version = number
        .as_u64()
        .filter(|&v| v <= u64::from(u8::MAX))
        .ok_or_else(unsupported)?;

    // Only one layout exists so far; new versions branch here
    if version != u64::from(CURRENT_EMBED_VERSION) {
        return Err(unsupported());
    }

    Ok(())
}

fn required_string<'a>(
    object: &'a Map<String, Value>,
    field: &'static str,
    max: usize,
) -> Result<&'a str, DescriptorError> {
    optional_string(object, field, max)?.ok_or(DescriptorError::MissingField { field })
}

/// `null` counts as absent; any other non-string value is an error.
fn optional_string<'a>(
    object: &'a Map<String, Value>,
    field: &'static str,
    max: usize,
) -> Result<Option<&'a str>, DescriptorError> {
    let text = match object.get(field) {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::String(s)) => s.as_str(),
        Some(_) => return Err(DescriptorError::NotAString { field }),
    };

    if text.len() > max {
        return Err(DescriptorError::TooLong {
            field,
            len: text.len(),
            max,
        });
    }
    if text.contains('\0') {
        return Err(DescriptorError::ContainsNul { field });
    }

    Ok(Some(text))
}

/// Blank out `//` and `/* */` comments outside of strings.
///
/// Comment bytes become spaces and newlines are kept, so parse errors still
/// point at the right line and column.
fn strip_comments(input: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len());
    let mut i = 0;
    let mut in_string = false;

    while i < input.len() {
        let b = input[i];

        if in_string {
            out.push(b);
            if b == b'\\' && i + 1 < input.len() {
                out.push(input[i + 1]);
                i += 2;
                continue;
            }
            if b == b'"' {
                in_string = false;
            }
            i += 1;
            continue;
        }

        match (b, input.get(i + 1)) {
            (b'"', _) => {
                in_string = true;
                out.push(b);
                i += 1;
            }
            (b'/', Some(b'/')) => {
                while i < input.len() && input[i] != b'\n' {
                    out.push(b' ');
                    i += 1;
                }
            }
            (b'/', Some(b'*')) => {
                out.extend_from_slice(b"  ");
                i += 2;
                while i < input.len() && !(input[i] == b'*' && input.get(i + 1) == Some(&b'/')) {
                    out.push(if input[i] == b'\n' { b'\n' } else { b' ' });
                    i += 1;
                }
                if i < input.len() {
                    out.extend_from_slice(b"  ");
                    i += 2;
                }
            }
            _ => {
                out.push(b);
                i += 1;
            }
        }
    }

    out
}

/// Blank out commas that directly precede a closing `}` or `]`.
fn strip_trailing_commas(input: &[u8]) -> Vec<u8> {
    let mut out = input.to_vec();
    let mut in_string = false;
    let mut escaped = false;

    for i in 0..input.len() {
        let b = input[i];
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }

        match b {
            b'"' => in_string = true,
            b',' => {
                let next = input[i + 1..].iter().find(|c| !c.is_ascii_whitespace());
                if matches!(next, Some(b'}') | Some(b']')) {
                    out[i] = b' ';
                }
            }
            _ => {}
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn validate(json: Value) -> Result<ModelInfo, DescriptorError> {
        validate_descriptor(&json)
    }

    #[test]
    fn test_minimal_descriptor_defaults() {
        let info = validate(json!({"embed_version": 1, "internal_name": "Mario"})).unwrap();

        assert_eq!(info.internal_name, "Mario");
        assert_eq!(info.display_name, "Mario");
        assert_eq!(info.author, "N/A");
    }

    #[test]
    fn test_all_fields() {
        let info = validate(json!({
            "embed_version": 1,
            "internal_name": "adult_link",
            "display_name": "Adult Link",
            "author": "Somebody"
        }))
        .unwrap();

        assert_eq!(
            info,
            ModelInfo {
                internal_name: "adult_link".to_string(),
                display_name: "Adult Link".to_string(),
                author: "Somebody".to_string(),
            }
        );
    }

    #[test]
    fn test_empty_display_name_falls_back() {
        let info =
            validate(json!({"embed_version": 1, "internal_name": "X", "display_name": ""})).unwrap();
        assert_eq!(info.display_name, "X");
    }

    #[test]
    fn test_null_optional_fields_fall_back() {
        let info = validate(json!({
            "embed_version": 1,
            "internal_name": "X",
            "display_name": null,
            "author": null
        }))
        .unwrap();
        assert_eq!(info.display_name, "X");
        assert_eq!(info.author, "N/A");
    }

    #[test]
    fn test_empty_author_defaults() {
        let info =
            validate(json!({"embed_version": 1, "internal_name": "X", "author": ""})).unwrap();
        assert_eq!(info.author, DEFAULT_AUTHOR);
    }

    #[test]
    fn test_long_internal_name_fallback_is_truncated() {
        let internal = "n".repeat(63);
        let info = validate(json!({"embed_version": 1, "internal_name": internal})).unwrap();

        assert_eq!(info.internal_name.len(), 63);
        assert_eq!(info.display_name, "n".repeat(MAX_DISPLAY_NAME_LEN));
    }

    #[test]
    fn test_fallback_truncation_respects_char_boundary() {
        // 30 ASCII bytes + a 2-byte char would straddle the 31-byte limit
        let internal = format!("{}é", "a".repeat(30));
        let info = validate(json!({"embed_version": 1, "internal_name": internal})).unwrap();
        assert_eq!(info.display_name, "a".repeat(30));
    }

    #[test]
    fn test_internal_name_boundary() {
        let ok = validate(json!({"embed_version": 1, "internal_name": "a".repeat(63)}));
        assert!(ok.is_ok());

        let err = validate(json!({"embed_version": 1, "internal_name": "a".repeat(64)})).unwrap_err();
        assert!(matches!(
            err,
            DescriptorError::TooLong {
                field: "internal_name",
                len: 64,
                max: 63
            }
        ));
    }

    #[test]
    fn test_length_is_measured_in_bytes() {
        // 16 two-byte chars = 32 bytes, over the 31-byte display limit
        let err = validate(json!({
            "embed_version": 1,
            "internal_name": "x",
            "display_name": "é".repeat(16)
        }))
        .unwrap_err();
        assert!(matches!(
            err,
            DescriptorError::TooLong {
                field: "display_name",
                len: 32,
                max: 31
            }
        ));
    }

    #[test]
    fn test_display_name_too_long() {
        let err = validate(json!({
            "embed_version": 1,
            "internal_name": "x",
            "display_name": "d".repeat(32)
        }))
        .unwrap_err();
        assert!(matches!(err, DescriptorError::TooLong { field: "display_name", .. }));
    }

    #[test]
    fn test_author_too_long() {
        let err = validate(json!({
            "embed_version": 1,
            "internal_name": "x",
            "author": "a".repeat(64)
        }))
        .unwrap_err();
        assert!(matches!(
            err,
            DescriptorError::TooLong {
                field: "author",
                max: 63,
                ..
            }
        ));
    }

    #[test]
    fn test_unsupported_version_is_distinct() {
        let err = validate(json!({"embed_version": 2, "internal_name": "x"})).unwrap_err();
        assert!(matches!(err, DescriptorError::UnsupportedVersion { .. }));

        let err = validate(json!({"embed_version": 256, "internal_name": "x"})).unwrap_err();
        assert!(matches!(err, DescriptorError::UnsupportedVersion { .. }));

        let err = validate(json!({"embed_version": -1, "internal_name": "x"})).unwrap_err();
        assert!(matches!(err, DescriptorError::UnsupportedVersion { .. }));
    }

    #[test]
    fn test_missing_or_non_integer_version() {
        for descriptor in [
            json!({"internal_name": "x"}),
            json!({"embed_version": "1", "internal_name": "x"}),
            json!({"embed_version": 1.5, "internal_name": "x"}),
            json!({"embed_version": null, "internal_name": "x"}),
        ] {
            let err = validate(descriptor).unwrap_err();
            assert!(matches!(err, DescriptorError::VersionNotInteger));
        }
    }

    #[test]
    fn test_version_checked_before_names() {
        let err = validate(json!({"embed_version": 3, "internal_name": 7})).unwrap_err();
        assert!(matches!(err, DescriptorError::UnsupportedVersion { .. }));
    }

    #[test]
    fn test_internal_name_errors() {
        let err = validate(json!({"embed_version": 1})).unwrap_err();
        assert!(matches!(
            err,
            DescriptorError::MissingField {
                field: "internal_name"
            }
        ));

        let err = validate(json!({"embed_version": 1, "internal_name": 5})).unwrap_err();
        assert!(matches!(
            err,
            DescriptorError::NotAString {
                field: "internal_name"
            }
        ));

        let err = validate(json!({"embed_version": 1, "internal_name": ""})).unwrap_err();
        assert!(matches!(err, DescriptorError::EmptyInternalName));
    }

    #[test]
    fn test_nul_in_names_is_rejected() {
        for text in [
            r#"{"embed_version": 1, "internal_name": "\u0000"}"#,
            r#"{"embed_version": 1, "internal_name": "ab\u0000cd"}"#,
        ] {
            let err = load_descriptor(text).unwrap_err();
            assert!(matches!(
                err,
                DescriptorError::ContainsNul {
                    field: "internal_name"
                }
            ));
        }

        let err = validate(json!({"embed_version": 1, "internal_name": "x", "author": "a\0b"}))
            .unwrap_err();
        assert!(matches!(err, DescriptorError::ContainsNul { field: "author" }));
        assert!(err.to_string().contains("'author'"));
    }

    #[test]
    fn test_non_string_optional_field() {
        let err = validate(json!({"embed_version": 1, "internal_name": "x", "author": ["a"]}))
            .unwrap_err();
        assert!(matches!(err, DescriptorError::NotAString { field: "author" }));
    }

    #[test]
    fn test_root_must_be_object() {
        let err = validate(json!([1, 2])).unwrap_err();
        assert!(matches!(err, DescriptorError::NotAnObject));
    }

    #[test]
    fn test_error_message_names_field_and_limit() {
        let err = validate(json!({"embed_version": 1, "internal_name": "a".repeat(70)})).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("'internal_name'"));
        assert!(message.contains("63"));
    }

    #[test]
    fn test_parse_tolerates_comments_and_trailing_commas() {
        let text = r#"
            // player model info
            {
                "embed_version": 1, /* only version */
                "internal_name": "Mario",
                "author": "someone",
            }
        "#;
        let info = load_descriptor(text).unwrap();
        assert_eq!(info.internal_name, "Mario");
        assert_eq!(info.author, "someone");
    }

    #[test]
    fn test_parse_keeps_comment_markers_inside_strings() {
        let text = r#"{"embed_version": 1, "internal_name": "a//b", "display_name": "/*x*/,}"}"#;
        let info = load_descriptor(text).unwrap();
        assert_eq!(info.internal_name, "a//b");
        assert_eq!(info.display_name, "/*x*/,}");
    }

    #[test]
    fn test_parse_escaped_quote_in_string() {
        let text = r#"{"embed_version": 1, "internal_name": "say \"hi\" // not a comment",}"#;
        let info = load_descriptor(text).unwrap();
        assert_eq!(info.internal_name, r#"say "hi" // not a comment"#);
    }

    #[test]
    fn test_parse_skips_leading_byte_order_mark() {
        let text = "\u{feff}{\"embed_version\": 1, \"internal_name\": \"Mario\"}";
        let info = load_descriptor(text).unwrap();
        assert_eq!(info.internal_name, "Mario");

        // Only one mark is skipped, and only at the very start
        assert!(parse_descriptor("\u{feff}\u{feff}{}").is_err());
        assert!(parse_descriptor(" \u{feff}{}").is_err());
    }

    #[test]
    fn test_parse_trailing_comma_in_array() {
        let value = parse_descriptor("[1, 2, ]").unwrap();
        assert_eq!(value, json!([1, 2]));
    }

    #[test]
    fn test_parse_malformed() {
        assert!(matches!(
            parse_descriptor("{\"embed_version\": 1"),
            Err(DescriptorError::Parse(_))
        ));
        assert!(matches!(
            parse_descriptor("{\"a\": 1 /* unterminated"),
            Err(DescriptorError::Parse(_))
        ));
    }

    #[test]
    fn test_parse_error_line_is_preserved() {
        let text = "/* one\ntwo */\n{\n  \"a\": @\n}";
        match parse_descriptor(text) {
            Err(DescriptorError::Parse(e)) => assert_eq!(e.line(), 4),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_to_record() {
        let info = load_descriptor(r#"{"embed_version": 1, "internal_name": "Mario"}"#).unwrap();
        let record = info.to_record();
        assert_eq!(record.internal_name(), "Mario");
        assert_eq!(record.display_name(), "Mario");
        assert_eq!(record.author_name(), "N/A");
    }
}

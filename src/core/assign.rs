//! core/assign.rs
//!
//! Parse user tag assignments (`key=value`) into typed `TagDefinition`s.
//!
//! Rules:
//! - `key` is everything before the first `=`; it may not be empty
//! - `value` is everything after it, and may be empty
//! - value conversion failures are NOT errors here: they produce
//!   `TypedValue::Invalid` plus a `ValueIssue`, so a batch keeps going
//!
//! Pure apart from `tracing` diagnostics; never touches a file.

use std::num::IntErrorKind;

use tracing::warn;

use super::error::{Result, TagError, ValueIssue};
use super::schema::{self, TagId, TagType};
use super::value::TypedValue;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagDefinition {
    pub key: String,
    pub id: TagId,
    pub tag_type: TagType,
    pub value: TypedValue,
    /// Set whenever `value` is `Invalid`.
    pub issue: Option<ValueIssue>,
}

impl TagDefinition {
    /// Turn the soft failures into hard ones:
    /// unknown key -> `UnknownTagName`, bad value -> `InvalidTagValue`.
    pub fn validate(self) -> Result<Self> {
        if self.id == TagId::Unknown {
            return Err(TagError::UnknownTagName(self.key));
        }
        if self.value.is_invalid() {
            let issue = self.issue.unwrap_or(ValueIssue::UnknownType);
            return Err(TagError::InvalidTagValue {
                tag: self.key,
                issue,
            });
        }
        Ok(self)
    }
}

/// Split `foo=bar` into `("foo", "bar")`.
pub fn split_assignment(text: &str) -> Result<(&str, &str)> {
    match text.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key, value)),
        _ => Err(TagError::MalformedTagAssignment(text.to_string())),
    }
}

/// Convert a raw string according to `tag_type`.
///
/// Integers must fit a 32-bit signed value; the typed value stores them
/// widened.
pub fn convert_value(tag_type: TagType, raw: &str) -> std::result::Result<TypedValue, ValueIssue> {
    match tag_type {
        TagType::String => Ok(TypedValue::String(raw.to_string())),
        TagType::Integer => match raw.parse::<i32>() {
            Ok(n) => Ok(TypedValue::Integer(i64::from(n))),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                    Err(ValueIssue::OutOfRange(raw.to_string()))
                }
                _ => Err(ValueIssue::NotANumber(raw.to_string())),
            },
        },
        TagType::Invalid => Err(ValueIssue::UnknownType),
    }
}

/// Parse a single `key=value` assignment.
///
/// Only a malformed assignment is an `Err`. Unknown keys and bad values
/// come back inside the definition; call `validate()` to reject them.
pub fn parse_assignment(text: &str) -> Result<TagDefinition> {
    let (key, raw) = split_assignment(text)?;
    let id = schema::name_to_id(key);
    let tag_type = schema::name_to_type(key);

    let (value, issue) = match convert_value(tag_type, raw) {
        Ok(v) => (v, None),
        Err(issue) => {
            warn!(tag = key, "{issue}");
            (TypedValue::Invalid, Some(issue))
        }
    };

    Ok(TagDefinition {
        key: key.to_string(),
        id,
        tag_type,
        value,
        issue,
    })
}

/// Parse and validate a batch. Every assignment is looked at, failures
/// are collected next to the good definitions.
pub fn parse_assignments<I, S>(texts: I) -> (Vec<TagDefinition>, Vec<TagError>)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut defs = Vec::new();
    let mut errors = Vec::new();

    for text in texts {
        match parse_assignment(text.as_ref()).and_then(TagDefinition::validate) {
            Ok(def) => defs.push(def),
            Err(e) => errors.push(e),
        }
    }

    (defs, errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artist_assignment() {
        let def = parse_assignment("artist=Radiohead").unwrap();
        assert_eq!(def.id, TagId::Artist);
        assert_eq!(def.tag_type, TagType::String);
        assert_eq!(def.value, TypedValue::String("Radiohead".into()));
        assert!(def.issue.is_none());
    }

    #[test]
    fn value_keeps_later_equal_signs_and_may_be_empty() {
        let def = parse_assignment("comment=a=b").unwrap();
        assert_eq!(def.value.as_str(), Some("a=b"));

        let def = parse_assignment("genre=").unwrap();
        assert_eq!(def.value.as_str(), Some(""));
    }

    #[test]
    fn integer_assignment() {
        let def = parse_assignment("year=1997").unwrap();
        assert_eq!(def.value, TypedValue::Integer(1997));
        let def = parse_assignment("tracknumber=-3").unwrap();
        assert_eq!(def.value.as_int(), Some(-3));
        let def = parse_assignment("tracknumber=+3").unwrap();
        assert_eq!(def.value.as_int(), Some(3));
    }

    #[test]
    fn non_numeric_integer_is_invalid_not_fatal() {
        let def = parse_assignment("year=abcd").unwrap();
        assert!(def.value.is_invalid());
        assert_eq!(def.issue, Some(ValueIssue::NotANumber("abcd".into())));
    }

    #[test]
    fn integer_is_parsed_strictly() {
        for raw in ["", " 12", "12abc", "1.5"] {
            let def = parse_assignment(&format!("year={raw}")).unwrap();
            assert!(def.value.is_invalid(), "{raw:?} should be rejected");
        }
    }

    #[test]
    fn overflowing_integer_is_out_of_range() {
        let def = parse_assignment("year=99999999999999999999").unwrap();
        assert!(def.value.is_invalid());
        assert!(matches!(def.issue, Some(ValueIssue::OutOfRange(_))));
    }

    #[test]
    fn integers_are_limited_to_32_bits() {
        let def = parse_assignment("year=2147483647").unwrap();
        assert_eq!(def.value, TypedValue::Integer(i64::from(i32::MAX)));
        let def = parse_assignment("tracknumber=-2147483648").unwrap();
        assert_eq!(def.value, TypedValue::Integer(i64::from(i32::MIN)));

        for raw in ["2147483648", "3000000000", "-2147483649"] {
            let def = parse_assignment(&format!("year={raw}")).unwrap();
            assert!(def.value.is_invalid(), "{raw} should be out of range");
            assert_eq!(def.issue, Some(ValueIssue::OutOfRange(raw.into())));
        }
    }

    #[test]
    fn malformed_assignments() {
        for text in ["=value", "novalue", ""] {
            assert!(matches!(
                parse_assignment(text),
                Err(TagError::MalformedTagAssignment(_))
            ));
        }
    }

    #[test]
    fn unknown_key_is_soft_until_validated() {
        let def = parse_assignment("bpm=120").unwrap();
        assert_eq!(def.id, TagId::Unknown);
        assert_eq!(def.tag_type, TagType::Invalid);
        assert!(def.value.is_invalid());
        assert_eq!(def.issue, Some(ValueIssue::UnknownType));

        assert!(matches!(
            def.validate(),
            Err(TagError::UnknownTagName(k)) if k == "bpm"
        ));
    }

    #[test]
    fn validate_rejects_invalid_values() {
        let err = parse_assignment("year=x").unwrap().validate().unwrap_err();
        assert!(matches!(err, TagError::InvalidTagValue { tag, .. } if tag == "year"));
    }

    #[test]
    fn batch_continues_past_failures() {
        let (defs, errors) =
            parse_assignments(["artist=A", "novalue", "year=abcd", "bpm=1", "year=2001"]);
        assert_eq!(defs.len(), 2);
        assert_eq!(errors.len(), 3);
        assert_eq!(defs[1].value, TypedValue::Integer(2001));
    }
}

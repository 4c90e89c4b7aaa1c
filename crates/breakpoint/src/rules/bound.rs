//! Range bounds that may be infinite or NaN.
//!
//! Rule files written by Python's `json` module spell non-finite floats as
//! the bare tokens `Infinity`, `-Infinity` and `NaN`. Strict JSON has no such
//! tokens, so the loader quotes them first with [`quote_non_finite`] and the
//! bound fields accept the quoted spelling. Non-finite bounds serialize back
//! to the same quoted spelling, which keeps a served table reloadable.

use std::borrow::Cow;
use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserializer, Serializer};

const INFINITY: &str = "Infinity";
const NEG_INFINITY: &str = "-Infinity";
const NAN: &str = "NaN";

pub(crate) fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_nan() {
        serializer.serialize_str(NAN)
    } else if *value == f64::INFINITY {
        serializer.serialize_str(INFINITY)
    } else if *value == f64::NEG_INFINITY {
        serializer.serialize_str(NEG_INFINITY)
    } else {
        serializer.serialize_f64(*value)
    }
}

pub(crate) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    deserializer.deserialize_any(BoundVisitor)
}

struct BoundVisitor;

impl Visitor<'_> for BoundVisitor {
    type Value = f64;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number, \"Infinity\", \"-Infinity\" or \"NaN\"")
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<f64, E> {
        Ok(value)
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<f64, E> {
        Ok(value as f64)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<f64, E> {
        Ok(value as f64)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<f64, E> {
        match value {
            INFINITY => Ok(f64::INFINITY),
            NEG_INFINITY => Ok(f64::NEG_INFINITY),
            NAN => Ok(f64::NAN),
            other => Err(E::invalid_value(de::Unexpected::Str(other), &self)),
        }
    }
}

/// Quote bare `Infinity`, `-Infinity` and `NaN` tokens outside strings.
///
/// Text inside JSON strings is left alone. Input without those tokens is
/// returned borrowed.
pub(crate) fn quote_non_finite(json: &str) -> Cow<'_, str> {
    if !json.contains(INFINITY) && !json.contains(NAN) {
        return Cow::Borrowed(json);
    }

    let mut out = String::with_capacity(json.len() + 16);
    let mut in_string = false;
    let mut escaped = false;
    let mut rest = json;

    while let Some(c) = rest.chars().next() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
        } else if c == '"' {
            in_string = true;
        } else if let Some(token) = [NEG_INFINITY, INFINITY, NAN]
            .into_iter()
            .find(|token| rest.starts_with(token))
        {
            out.push('"');
            out.push_str(token);
            out.push('"');
            rest = &rest[token.len()..];
            continue;
        }

        out.push(c);
        rest = &rest[c.len_utf8()..];
    }

    Cow::Owned(out)
}

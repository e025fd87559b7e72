/*!
Coercion of raw flag text into JSON text.

Two shapes are produced:
  - `to_json_value`: a single JSON value (bare words become JSON strings)
  - `to_json_array`: a JSON array (comma separated input is split)

Both leave input that is already in the requested JSON shape untouched, so
running either on its own output is a no-op.

Which array elements get quoted is decided by the element type through the
`ListElement` trait, at compile time.
*/

use serde::de::IgnoredAny;
use std::borrow::Cow;

/// True when the whole of `s` is one well-formed JSON document.
pub fn is_valid_json(s: &str) -> bool {
    serde_json::from_str::<IgnoredAny>(s).is_ok()
}

/// Turn a scalar flag value into JSON text.
///
/// `10`, `true` and `"quoted"` are JSON already and pass through; anything
/// else is wrapped in double quotes as-is. Embedded quotes are not escaped,
/// so such input fails later, at decode time.
pub fn to_json_value(s: &str) -> Cow<'_, str> {
    if is_valid_json(s) {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(format!("\"{s}\""))
    }
}

/// How elements of a comma separated list are written into a JSON array.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ElementKind {
    /// Numbers and booleans: written bare, `1,2` -> `[1,2]`.
    Literal,
    /// Strings and string-like types: each element quoted, `a,b` -> `["a","b"]`.
    Quoted,
}

/// Element types a list flag can decode into.
///
/// Wrapper types report the kind of the type they wrap, so `Vec<Option<i64>>`
/// is handled like `Vec<i64>`.
pub trait ListElement {
    const KIND: ElementKind;
}

macro_rules! list_elements {
    ($kind:ident: $($t:ty),+ $(,)?) => {
        $(
            impl ListElement for $t {
                const KIND: ElementKind = ElementKind::$kind;
            }
        )+
    };
}

list_elements!(Literal: bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
list_elements!(Quoted: String, char, std::path::PathBuf);

impl<T: ListElement + ?Sized> ListElement for Box<T> {
    const KIND: ElementKind = T::KIND;
}

impl<T: ListElement> ListElement for Option<T> {
    const KIND: ElementKind = T::KIND;
}

impl<T: ListElement> ListElement for Vec<T> {
    const KIND: ElementKind = T::KIND;
}

impl<T: ListElement, const N: usize> ListElement for [T; N] {
    const KIND: ElementKind = T::KIND;
}

/// Turn a list flag value into JSON array text.
///
/// Input counts as "already an array" only when it is valid JSON *and*
/// starts with `[`; a lone `5` is valid JSON too, but it is a scalar and is
/// still wrapped.
pub fn to_json_array(s: &str, kind: ElementKind) -> Cow<'_, str> {
    if s.starts_with('[') && is_valid_json(s) {
        return Cow::Borrowed(s);
    }

    match kind {
        ElementKind::Literal => Cow::Owned(format!("[{s}]")),
        ElementKind::Quoted => {
            let escaped = s.replace('"', "\\\"");
            Cow::Owned(format!("[\"{}\"]", escaped.replace(',', "\",\"")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_word_is_quoted() {
        assert_eq!(to_json_value("test"), "\"test\"");
    }

    #[test]
    fn json_scalars_pass_through() {
        assert_eq!(to_json_value("10"), "10");
        assert_eq!(to_json_value("true"), "true");
        assert_eq!(to_json_value("\"already\""), "\"already\"");
        assert!(matches!(to_json_value("10"), Cow::Borrowed(_)));
    }

    #[test]
    fn empty_value_becomes_empty_string() {
        assert_eq!(to_json_value(""), "\"\"");
    }

    #[test]
    fn embedded_quotes_are_not_escaped_for_scalars() {
        let out = to_json_value("say \"hi\"");
        assert_eq!(out, "\"say \"hi\"\"");
        assert!(!is_valid_json(&out));
    }

    #[test]
    fn value_coercion_is_idempotent() {
        for raw in ["test", "10", "2024-01-01T00:00:00Z", "", "a b c"] {
            let once = to_json_value(raw).into_owned();
            assert_eq!(to_json_value(&once), once.as_str(), "input {raw:?}");
        }
    }

    #[test]
    fn csv_strings_are_quoted_individually() {
        assert_eq!(
            to_json_array("monday,tuesday,wednesday", ElementKind::Quoted),
            r#"["monday","tuesday","wednesday"]"#
        );
    }

    #[test]
    fn csv_numbers_are_bracketed() {
        assert_eq!(
            to_json_array("323,207,511", ElementKind::Literal),
            "[323,207,511]"
        );
    }

    #[test]
    fn json_array_passes_through() {
        let raw = r#"["monday", "tuesday", "wednesday"]"#;
        assert_eq!(to_json_array(raw, ElementKind::Quoted), raw);
        assert_eq!(to_json_array("[1, 2]", ElementKind::Literal), "[1, 2]");
    }

    #[test]
    fn lone_scalar_is_not_mistaken_for_array() {
        assert_eq!(to_json_array("5", ElementKind::Literal), "[5]");
        assert_eq!(to_json_array("5", ElementKind::Quoted), r#"["5"]"#);
    }

    #[test]
    fn broken_bracketed_input_is_treated_as_csv() {
        assert_eq!(to_json_array("[a,b", ElementKind::Quoted), r#"["[a","b"]"#);
    }

    #[test]
    fn quotes_inside_elements_are_escaped() {
        let out = to_json_array(r#"say "hi",x"#, ElementKind::Quoted);
        assert_eq!(out, r#"["say \"hi\"","x"]"#);
        let parsed: Vec<String> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, vec![r#"say "hi""#.to_string(), "x".to_string()]);
    }

    #[test]
    fn array_coercion_is_idempotent() {
        for (raw, kind) in [
            ("a,b", ElementKind::Quoted),
            ("1,2,3", ElementKind::Literal),
            ("true,false", ElementKind::Literal),
        ] {
            let once = to_json_array(raw, kind).into_owned();
            assert_eq!(to_json_array(&once, kind), once.as_str());
        }
    }

    #[test]
    fn element_kind_follows_wrapped_type() {
        assert_eq!(<i64 as ListElement>::KIND, ElementKind::Literal);
        assert_eq!(<bool as ListElement>::KIND, ElementKind::Literal);
        assert_eq!(<String as ListElement>::KIND, ElementKind::Quoted);
        assert_eq!(<Option<Vec<f64>> as ListElement>::KIND, ElementKind::Literal);
        assert_eq!(<Box<[String; 2]> as ListElement>::KIND, ElementKind::Quoted);
    }
}

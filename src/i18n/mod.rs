//! Message catalog for user-facing text.
//!
//! The catalog is embedded at build time (`en_US.json`, a list of
//! `{ "id", "translation" }` entries) and parsed once on first use.
//! Placeholders use `{NAME}` and are filled from the `args` slice given to
//! [`translate`].

use serde::Deserialize;
use std::collections::HashMap;
use std::sync::OnceLock;

const EN_US: &str = include_str!("en_US.json");

#[derive(Debug, Deserialize)]
struct Entry {
    id: String,
    translation: String,
}

static CATALOG: OnceLock<HashMap<String, String>> = OnceLock::new();

fn catalog() -> &'static HashMap<String, String> {
    CATALOG.get_or_init(|| load(EN_US))
}

fn load(raw: &str) -> HashMap<String, String> {
    match serde_json::from_str::<Vec<Entry>>(raw) {
        Ok(entries) => entries
            .into_iter()
            .map(|e| (e.id, e.translation))
            .collect(),
        Err(e) => {
            crate::log_error!("message catalog is not valid JSON: {e}");
            HashMap::new()
        }
    }
}

/// Look up `id` and substitute its placeholders.
///
/// Unknown ids come back verbatim so a missing entry is still visible to the
/// user instead of turning into an empty line.
pub fn translate(id: &str, args: &[(&str, &str)]) -> String {
    match catalog().get(id) {
        Some(template) => render(template, args),
        None => id.to_string(),
    }
}

// Single pass so substituted values are never scanned for placeholders.
fn render(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };
        let name = &after[..close];
        match args.iter().find(|(k, _)| *k == name) {
            Some((_, value)) => out.push_str(value),
            None => {
                out.push('{');
                out.push_str(name);
                out.push('}');
            }
        }
        rest = &after[close + 1..];
    }
    out.push_str(rest);
    out
}

/*!
output.rs

Rendering of decoded values and failures for the `flag-decode` CLI.

Formats:
  - table (default): human readable; objects become KEY/VALUE tables, lists
    of objects become one row per item with a column per key
  - json: pretty printed
  - yaml

Style decisions (color, width) come from `StyleOptions::detect()`:
  NO_COLOR disables ANSI color, COLUMNS bounds the table width.

Functions here return strings; only `print` and `report_failure` write.
*/

use anyhow::Result;
use serde_json::{Map, Value};
use std::borrow::Cow;

use crate::deserialize::DecodeError;
use crate::i18n::translate;

pub const OUTPUT_ENV: &str = "FLAG_DECODE_OUTPUT";

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

impl OutputFormat {
    /// Flag value first, then the environment value, then `table`.
    pub fn resolve(flag: Option<OutputFormat>, env: Option<&str>) -> Result<OutputFormat> {
        if let Some(format) = flag {
            return Ok(format);
        }
        match env.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => <OutputFormat as clap::ValueEnum>::from_str(raw, true)
                .map_err(|_| anyhow::anyhow!("invalid {OUTPUT_ENV} value '{raw}' (expected table, json or yaml)")),
            None => Ok(OutputFormat::Table),
        }
    }

    pub fn is_machine_readable(&self) -> bool {
        !matches!(self, OutputFormat::Table)
    }
}

/* -------------------------------------------------------------------------- */
/* Style                                                                      */
/* -------------------------------------------------------------------------- */

#[derive(Debug, Clone)]
pub struct StyleOptions {
    pub use_color: bool,
    pub term_width: usize,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self::detect()
    }
}

impl StyleOptions {
    pub fn detect() -> Self {
        let width = std::env::var("COLUMNS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .map(|w| w.clamp(40, 220))
            .unwrap_or(100);

        StyleOptions {
            use_color: std::env::var_os("NO_COLOR").is_none(),
            term_width: width,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Role {
    Accent,
    Error,
    Dim,
}

pub fn color(role: Role, text: impl AsRef<str>, style: &StyleOptions) -> String {
    if !style.use_color {
        return text.as_ref().to_string();
    }
    let code = match role {
        Role::Accent => "38;5;213",
        Role::Error => "38;5;196",
        Role::Dim => "2",
    };
    format!("\x1b[{code}m{}\x1b[0m", text.as_ref())
}

/* -------------------------------------------------------------------------- */
/* Values                                                                     */
/* -------------------------------------------------------------------------- */

pub fn render(value: &Value, format: OutputFormat, style: &StyleOptions) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?.trim_end().to_string()),
        OutputFormat::Table => Ok(render_table(value, style)),
    }
}

pub fn print(value: &Value, format: OutputFormat) -> Result<()> {
    let style = StyleOptions::detect();
    println!("{}", render(value, format, &style)?);
    Ok(())
}

fn render_table(value: &Value, style: &StyleOptions) -> String {
    match value {
        Value::Object(map) if map.is_empty() => translate("no-data-for-table", &[]),
        Value::Object(map) => {
            let rows: Vec<Vec<String>> = map
                .iter()
                .map(|(k, v)| vec![k.clone(), cell(v)])
                .collect();
            table(&["KEY", "VALUE"], &rows, style)
        }
        Value::Array(items) if items.is_empty() => translate("no-data-for-table", &[]),
        Value::Array(items) => match objects(items) {
            Some(objs) => {
                let headers = column_order(&objs);
                let header_refs: Vec<&str> = headers.iter().map(String::as_str).collect();
                let rows: Vec<Vec<String>> = objs
                    .iter()
                    .map(|o| headers.iter().map(|h| o.get(h).map(cell).unwrap_or_default()).collect())
                    .collect();
                table(&header_refs, &rows, style)
            }
            None => {
                let rows: Vec<Vec<String>> = items.iter().map(|v| vec![cell(v)]).collect();
                table(&["VALUE"], &rows, style)
            }
        },
        other => cell(other),
    }
}

fn objects(items: &[Value]) -> Option<Vec<&Map<String, Value>>> {
    items.iter().map(Value::as_object).collect()
}

/// Keys in first-seen order across all rows.
fn column_order(objs: &[&Map<String, Value>]) -> Vec<String> {
    let mut headers: Vec<String> = Vec::new();
    for o in objs {
        for k in o.keys() {
            if !headers.iter().any(|h| h == k) {
                headers.push(k.clone());
            }
        }
    }
    headers
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/* -------------------------------------------------------------------------- */
/* Failures                                                                   */
/* -------------------------------------------------------------------------- */

/// (message, cause) for display. Decode errors keep their two parts apart;
/// other errors use the top-level context and the rest of the chain.
fn failure_parts(err: &anyhow::Error) -> (String, String) {
    if let Some(decode) = err.downcast_ref::<DecodeError>() {
        return (decode.message().to_string(), decode.cause().to_string());
    }
    let causes: Vec<String> = err.chain().skip(1).map(|c| c.to_string()).collect();
    (err.to_string(), causes.join(": "))
}

pub fn render_failure(err: &anyhow::Error, format: OutputFormat, style: &StyleOptions) -> Result<String> {
    let (message, cause) = failure_parts(err);
    let mut body = serde_json::json!({
        "status": "error",
        "message": message,
        "error": cause,
    });
    if let Some(decode) = err.downcast_ref::<DecodeError>() {
        body["kind"] = Value::from(decode.kind().as_str());
        if let Some(flag) = decode.flag() {
            body["flag"] = Value::from(flag);
        }
        if let Some(path) = decode.path() {
            body["file"] = Value::from(path.display().to_string());
        }
    }
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&body)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(&body)?.trim_end().to_string()),
        OutputFormat::Table => {
            let mut out = color(Role::Error, translate("failed", &[]), style);
            out.push('\n');
            out.push_str(&message);
            if !cause.is_empty() {
                out.push_str(":\n");
                out.push_str(&cause);
            }
            Ok(out)
        }
    }
}

/// Machine-readable formats report on stdout so a consumer parsing the output
/// sees the error document; table output goes to stderr.
pub fn report_failure(err: &anyhow::Error, format: OutputFormat) {
    let style = StyleOptions::detect();
    match render_failure(err, format, &style) {
        Ok(text) if format.is_machine_readable() => println!("{text}"),
        Ok(text) => eprintln!("{text}"),
        Err(e) => {
            crate::log_error!("failed to render error report: {e}");
            eprintln!("{err:#}");
        }
    }
}

/* -------------------------------------------------------------------------- */
/* Table Rendering                                                            */
/* -------------------------------------------------------------------------- */

const MIN_COL_WIDTH: usize = 2;

pub fn table(headers: &[&str], rows: &[Vec<String>], style: &StyleOptions) -> String {
    if headers.is_empty() {
        return String::new();
    }
    let col_count = headers.len();

    let mut widths: Vec<usize> = headers.iter().map(|h| display_width(h)).collect();
    for row in rows {
        for (i, c) in row.iter().enumerate().take(col_count) {
            widths[i] = widths[i].max(display_width(c));
        }
    }

    // shrink the widest columns first until the table fits
    let total: usize = widths.iter().sum::<usize>() + (col_count - 1) * 2;
    if total > style.term_width {
        let mut overflow = total - style.term_width;
        let mut ordered: Vec<(usize, usize)> = widths.iter().copied().enumerate().collect();
        ordered.sort_by(|a, b| b.1.cmp(&a.1));
        for (idx, w) in ordered {
            if overflow == 0 {
                break;
            }
            if w > MIN_COL_WIDTH {
                let shrink = (w - MIN_COL_WIDTH).min(overflow);
                widths[idx] -= shrink;
                overflow -= shrink;
            }
        }
    }

    let mut lines: Vec<String> = Vec::with_capacity(rows.len() + 2);

    let header: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| color(Role::Accent, pad_or_truncate(h, widths[i]), style))
        .collect();
    lines.push(header.join("  "));

    let sep: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    lines.push(color(Role::Dim, sep.join("  "), style));

    for row in rows {
        let cells: Vec<String> = (0..col_count)
            .map(|c| pad_or_truncate(row.get(c).map(String::as_str).unwrap_or(""), widths[c]))
            .collect();
        lines.push(cells.join("  ").trim_end().to_string());
    }

    lines.join("\n")
}

fn pad_or_truncate(s: &str, width: usize) -> String {
    let len = display_width(s);
    if len <= width {
        return format!("{s}{}", " ".repeat(width - len));
    }
    if width <= 1 {
        return "…".to_string();
    }
    let mut out: String = strip_ansi(s).chars().take(width - 1).collect();
    out.push('…');
    out
}

fn strip_ansi(s: &str) -> Cow<'_, str> {
    if !s.contains('\x1b') {
        return Cow::Borrowed(s);
    }
    let mut buf = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for n in chars.by_ref() {
                if n.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        buf.push(c);
    }
    Cow::Owned(buf)
}

fn display_width(s: &str) -> usize {
    strip_ansi(s).chars().count()
}

/* -------------------------------------------------------------------------- */
/* Tests                                                                      */
/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deserialize;
    use serde_json::json;

    fn plain() -> StyleOptions {
        StyleOptions {
            use_color: false,
            term_width: 100,
        }
    }

    #[test]
    fn resolve_prefers_flag_then_env() {
        assert_eq!(
            OutputFormat::resolve(Some(OutputFormat::Yaml), Some("json")).unwrap(),
            OutputFormat::Yaml
        );
        assert_eq!(
            OutputFormat::resolve(None, Some("JSON")).unwrap(),
            OutputFormat::Json
        );
        assert_eq!(OutputFormat::resolve(None, Some("  ")).unwrap(), OutputFormat::Table);
        assert_eq!(OutputFormat::resolve(None, None).unwrap(), OutputFormat::Table);
        let err = OutputFormat::resolve(None, Some("xml")).unwrap_err();
        assert!(err.to_string().contains(OUTPUT_ENV));
    }

    #[test]
    fn object_renders_key_value_table() {
        let out = render(&json!({"event": "e", "data": {"k": 1}}), OutputFormat::Table, &plain()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("KEY"));
        assert!(lines.iter().any(|l| l.starts_with("data") && l.ends_with(r#"{"k":1}"#)));
        assert!(lines.iter().any(|l| l.starts_with("event") && l.ends_with('e')));
    }

    #[test]
    fn list_of_objects_gets_union_of_columns() {
        let v = json!([{"a": 1}, {"a": 2, "b": "x"}]);
        let out = render(&v, OutputFormat::Table, &plain()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0].split_whitespace().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[2].trim_end(), "1");
        assert!(lines[3].ends_with('x'));
    }

    #[test]
    fn scalars_and_scalar_lists() {
        assert_eq!(render(&json!("test"), OutputFormat::Table, &plain()).unwrap(), "test");
        assert_eq!(render(&json!(10), OutputFormat::Table, &plain()).unwrap(), "10");
        let out = render(&json!([323, 207]), OutputFormat::Table, &plain()).unwrap();
        assert_eq!(out.lines().collect::<Vec<_>>(), vec!["VALUE", "-----", "323", "207"]);
    }

    #[test]
    fn empty_collections_say_so() {
        let out = render(&json!([]), OutputFormat::Table, &plain()).unwrap();
        assert_eq!(out, translate("no-data-for-table", &[]));
    }

    #[test]
    fn json_and_yaml() {
        let v = json!({"a": [1, 2]});
        let j = render(&v, OutputFormat::Json, &plain()).unwrap();
        assert_eq!(serde_json::from_str::<Value>(&j).unwrap(), v);
        let y = render(&v, OutputFormat::Yaml, &plain()).unwrap();
        assert_eq!(serde_yaml::from_str::<Value>(&y).unwrap(), v);
    }

    #[test]
    fn narrow_terminal_truncates_cells() {
        let rows = vec![vec!["k".to_string(), "x".repeat(80)]];
        let out = table(&["KEY", "VALUE"], &rows, &StyleOptions { use_color: false, term_width: 40 });
        for line in out.lines() {
            assert!(display_width(line) <= 40, "line too wide: {line}");
        }
        assert!(out.contains('…'));
    }

    #[test]
    fn decode_failure_table_report() {
        let err = deserialize::json::<Value>(r#"{"foo: "bar"}"#, "bad", "any object").unwrap_err();
        let err = anyhow::Error::new(err);
        let out = render_failure(&err, OutputFormat::Table, &plain()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "FAILED");
        assert_eq!(lines[1], "Error parsing flag 'bad' as 'any object':");
        assert!(lines[2].starts_with("expected `:`"));
    }

    #[test]
    fn decode_failure_json_report() {
        let err = deserialize::list::<i64>("1,x", "ids", "integer array").unwrap_err();
        let err = anyhow::Error::new(err);
        let out = render_failure(&err, OutputFormat::Json, &plain()).unwrap();
        let v: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["status"], "error");
        assert_eq!(v["message"], "Error parsing flag 'ids' as 'integer array'");
        assert!(v["error"].as_str().unwrap().contains("line 1"));
        assert_eq!(v["kind"], "parse");
        assert_eq!(v["flag"], "ids");
        assert!(v.get("file").is_none());
    }

    #[test]
    fn file_failure_yaml_report_names_file() {
        let err = deserialize::json::<Value>("@no/such/file.json", "body", "any object").unwrap_err();
        let err = anyhow::Error::new(err);
        let out = render_failure(&err, OutputFormat::Yaml, &plain()).unwrap();
        let v: Value = serde_yaml::from_str(&out).unwrap();
        assert_eq!(v["message"], "Error reading file 'no/such/file.json'");
        assert_eq!(v["file"], "no/such/file.json");
        assert_eq!(v["kind"], "file");
    }

    #[test]
    fn other_failures_use_context_chain() {
        let err = anyhow::anyhow!("disk full").context("Error writing file 'out.bin'");
        let (message, cause) = failure_parts(&err);
        assert_eq!(message, "Error writing file 'out.bin'");
        assert_eq!(cause, "disk full");

        let out = render_failure(&err, OutputFormat::Json, &plain()).unwrap();
        let v: Value = serde_json::from_str(&out).unwrap();
        assert!(v.get("kind").is_none());
    }

    #[test]
    fn color_respects_style() {
        let colored = color(Role::Error, "FAILED", &StyleOptions { use_color: true, term_width: 80 });
        assert_ne!(colored, "FAILED");
        assert_eq!(strip_ansi(&colored), "FAILED");
        assert_eq!(color(Role::Error, "FAILED", &plain()), "FAILED");
    }
}

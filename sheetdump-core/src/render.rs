//! Textual representations of cell values
//!
//! Two forms are produced. [`repr`] is type-revealing (text is quoted) and is
//! used by the formula pass. [`display`] is the plain form used inside the
//! value pass, where each `label=value` entry gets quoted as a whole instead.

use crate::reader::CellValue;

/// Largest magnitude below which integral floats print without a fraction
const INTEGRAL_LIMIT: f64 = 1e16;

/// Type-revealing representation: `'Label'`, `0`, `1.5`, `true`, `2024-01-31T00:00:00`
pub fn repr(value: &CellValue) -> String {
    match value {
        CellValue::Text(s) => quote(s),
        CellValue::DateTime(dt) => dt.format("%Y-%m-%dT%H:%M:%S").to_string(),
        other => display(other),
    }
}

/// Plain representation: `Label`, `0`, `1.5`, `true`, `2024-01-31 00:00:00`
pub fn display(value: &CellValue) -> String {
    match value {
        CellValue::Number(n) => format_number(*n),
        CellValue::Text(s) => s.clone(),
        CellValue::Boolean(b) => b.to_string(),
        CellValue::DateTime(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        CellValue::Iso(s) => s.clone(),
        CellValue::Error(e) => e.clone(),
    }
}

/// Integral values print without a fraction, everything else in shortest round-trip form
pub fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < INTEGRAL_LIMIT {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// Quote text with single quotes, or double quotes when that avoids escaping
pub fn quote(s: &str) -> String {
    let delim = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(s.len() + 2);
    out.push(delim);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == delim => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(delim);
    out
}

/// Bracketed list of quoted items: `['A1=Label', 'B1=Label!']`
pub fn quote_list<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let quoted: Vec<String> = items.into_iter().map(|s| quote(s.as_ref())).collect();
    format!("[{}]", quoted.join(", "))
}

//! HTML rendering for the "Company Data" page.
//!
//! Pure functions: a slice of records in, a string out. The fragment shape
//! (one `<label>`/`<p>` pair per field, in name→email→phone→address order)
//! and the `0 results` fallback are the fixed output contract. Field values
//! are escaped before insertion; the original concatenated them raw, which
//! is an injection hole, not a contract to preserve.

use crate::record::CompanyRecord;

/// Title and top-level heading of the rendered page.
pub const PAGE_TITLE: &str = "Company Data";

/// Fallback text rendered in place of the fragment when the query
/// returns no rows.
pub const EMPTY_RESULT_TEXT: &str = "0 results";

/// Escape a value for insertion into HTML element content.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the label/paragraph fragment for all records, in result order.
///
/// Zero records renders the literal `0 results` with no markup.
pub fn render_records(records: &[CompanyRecord]) -> String {
    if records.is_empty() {
        return EMPTY_RESULT_TEXT.to_string();
    }

    let mut out = String::new();
    for record in records {
        render_record(&mut out, record);
    }
    out
}

/// Append one record's four label/value pairs to `out`.
fn render_record(out: &mut String, record: &CompanyRecord) {
    let fields = [
        ("Name", &record.name),
        ("Email", &record.email),
        ("Phone", &record.phone),
        ("Address", &record.address),
    ];
    for (label, value) in fields {
        out.push_str(&format!(
            "<label>{} : </label><p>{}</p>\n",
            label,
            escape_html(value)
        ));
    }
}

/// Render the full HTML document: the fragment (or fallback) embedded in a
/// page titled "Company Data" with a matching top-level heading.
pub fn render_page(records: &[CompanyRecord]) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
</head>
<body>
    <h1>{title}</h1>
{body}</body>
</html>
"#,
        title = PAGE_TITLE,
        body = render_records(records),
    )
}

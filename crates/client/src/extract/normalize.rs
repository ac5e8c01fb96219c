//! Markdown rendering of component documentation with YAML frontmatter.

use mantine_docs_core::ComponentDoc;
use std::fmt::Write;

/// Render a component doc as Markdown.
///
/// Frontmatter format:
/// ```yaml
/// ---
/// component: <name>
/// package: <package name>
/// version: <documentation version>
/// source: <url>
/// fetched_at: <ISO8601 timestamp>
/// ---
/// ```
/// followed by the description, import, props table, examples and related
/// components. Empty sections are omitted.
pub fn format_markdown(doc: &ComponentDoc) -> String {
    let mut out = format!(
        "---\ncomponent: {name}\npackage: {package}\nversion: {version}\nsource: {source}\nfetched_at: {timestamp}\n---\n\n# {name}\n",
        name = doc.name,
        package = escape_yaml(&doc.package_name),
        version = escape_yaml(&doc.version),
        source = doc.url,
        timestamp = doc.last_fetched_at.to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
    );

    if !doc.description.is_empty() {
        let _ = write!(out, "\n{}\n", doc.description.trim());
    }

    let _ = write!(out, "\n## Import\n\n```tsx\n{}\n```\n", doc.import_statement);

    if !doc.props.is_empty() {
        out.push_str("\n## Props\n\n| Name | Type | Default | Description |\n| --- | --- | --- | --- |\n");
        for prop in &doc.props {
            let name = if prop.required { format!("{} (required)", prop.name) } else { prop.name.clone() };
            let default = prop.default_value.as_deref().map(|d| format!("`{}`", escape_cell(d)));
            let _ = writeln!(
                out,
                "| {} | `{}` | {} | {} |",
                escape_cell(&name),
                escape_cell(&prop.prop_type),
                default.as_deref().unwrap_or("-"),
                escape_cell(&prop.description)
            );
        }
    }

    if !doc.examples.is_empty() {
        out.push_str("\n## Examples\n");
        for example in &doc.examples {
            let _ = write!(out, "\n### {}\n", example.title);
            if let Some(description) = &example.description {
                let _ = write!(out, "\n{description}\n");
            }
            let _ = write!(out, "\n```tsx\n{}\n```\n", example.code.trim_end());
        }
    }

    if !doc.related_components.is_empty() {
        out.push_str("\n## Related components\n\n");
        for related in &doc.related_components {
            let _ = writeln!(out, "- {related}");
        }
    }

    out
}

/// Escape special YAML characters in a string.
fn escape_yaml(s: &str) -> String {
    if s.contains('\n') || s.contains(':') || s.starts_with('@') {
        format!("\"{}\"", s.replace('"', "\\\""))
    } else if s.is_empty() {
        "\"\"".to_string()
    } else {
        s.to_string()
    }
}

/// Keep table cells on one line and free of column separators.
fn escape_cell(s: &str) -> String {
    s.replace('|', "\\|").replace('\n', " ")
}

//! Component name canonicalization and source page addressing.

use mantine_docs_core::Error;
use url::Url;

/// Path prefix of component pages on the documentation site.
pub const COMPONENT_PATH_PREFIX: &str = "/core/";

/// A component's canonical name, URL slug and source page address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentPage {
    /// Canonical name, e.g. `ActionIcon`.
    pub name: String,
    /// Lower-cased kebab slug, e.g. `action-icon`.
    pub slug: String,
    pub url: Url,
}

impl ComponentPage {
    /// Resolve `raw_name` against the site at `base_url`.
    ///
    /// # Errors
    ///
    /// `Error::InvalidInput` for an empty name or one containing characters
    /// other than ASCII letters, digits, `-`, `_` and spaces;
    /// `Error::InvalidUrl` if `base_url` does not parse.
    pub fn new(base_url: &str, raw_name: &str) -> Result<Self, Error> {
        let name = canonical_name(raw_name);
        if name.is_empty() {
            return Err(Error::InvalidInput("component name cannot be empty".into()));
        }
        if !name.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(Error::InvalidInput(format!("invalid component name: {raw_name}")));
        }

        let slug = slug(&name);
        let base = Url::parse(base_url).map_err(|e| Error::InvalidUrl(format!("{base_url}: {e}")))?;
        let url = base
            .join(&format!("{COMPONENT_PATH_PREFIX}{slug}"))
            .map_err(|e| Error::InvalidUrl(e.to_string()))?;

        Ok(Self { name, slug, url })
    }
}

/// Canonicalize a component name to its leading-capital form.
///
/// Words separated by `-`, `_` or whitespace are joined, each starting with an
/// upper-case letter: `button` → `Button`, `action-icon` → `ActionIcon`.
/// All-caps words are folded (`BUTTON` → `Button`); mixed case is kept.
pub fn canonical_name(raw: &str) -> String {
    raw.split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(capitalize)
        .collect()
}

fn capitalize(part: &str) -> String {
    let folded;
    let part = if part.len() > 1 && part.chars().all(|c| !c.is_lowercase()) {
        folded = part.to_lowercase();
        folded.as_str()
    } else {
        part
    };

    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Kebab-case, lower-cased URL slug for a canonical name.
pub fn slug(canonical: &str) -> String {
    let mut out = String::with_capacity(canonical.len() + 4);
    let mut prev_lower = false;
    for c in canonical.chars() {
        if c.is_uppercase() {
            if prev_lower {
                out.push('-');
            }
            out.extend(c.to_lowercase());
            prev_lower = false;
        } else {
            out.push(c);
            prev_lower = c.is_lowercase() || c.is_ascii_digit();
        }
    }
    out
}

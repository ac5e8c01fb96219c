//! Compiled CSS selectors and patterns used by the component extractor.

use regex::Regex;
use scraper::Selector;
use std::sync::LazyLock;

macro_rules! selector {
    ($name:ident, $css:expr) => {
        pub(crate) static $name: LazyLock<Selector> =
            LazyLock::new(|| Selector::parse($css).expect("invalid selector"));
    };
}

macro_rules! regex {
    ($name:ident, $regex:expr) => {
        pub(crate) static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($regex).expect("invalid regex"));
    };
}

// Page title followed by its lead paragraph, in document order.
selector!(TITLE_OR_PARAGRAPH, "h1, p");
selector!(TABLE, "table");
selector!(TABLE_HEADER_CELL, "th");
selector!(TABLE_ROW, "tr");
selector!(TABLE_CELL, "td");
// Section headings, paragraphs and code blocks, in document order.
selector!(EXAMPLE_CONTEXT, "h2, h3, h4, h5, h6, p, pre");
selector!(ANCHOR, "a[href]");

regex!(
    PACKAGE_IMPORT,
    r#"import\s+[^;'"]*?\s*from\s+['"](@mantine/[A-Za-z0-9-]+)['"];?"#
);
regex!(PACKAGE_REFERENCE, r#"['"](@mantine/[A-Za-z0-9-]+)['"]"#);
regex!(COMPONENT_PATH, r"^/core/([a-z0-9]+(?:-[a-z0-9]+)*)/?$");

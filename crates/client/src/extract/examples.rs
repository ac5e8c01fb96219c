//! Code example extraction.

use mantine_docs_core::ExampleEntry;
use scraper::Html;

use super::selectors::EXAMPLE_CONTEXT;
use super::text_of;

/// Extract every `<pre>` block as an example, in document order.
///
/// The title is the nearest preceding section heading (`h2`-`h6`), falling
/// back to `Example N`. The description is the nearest preceding paragraph
/// within the same section.
pub fn extract_examples(document: &Html) -> Vec<ExampleEntry> {
    let mut examples = Vec::new();
    let mut heading: Option<String> = None;
    let mut paragraph: Option<String> = None;

    for element in document.select(&EXAMPLE_CONTEXT) {
        match element.value().name() {
            "pre" => {
                let position = examples.len() + 1;
                examples.push(ExampleEntry {
                    title: heading.clone().unwrap_or_else(|| format!("Example {position}")),
                    code: element.text().collect(),
                    description: paragraph.clone(),
                });
            }
            "p" => {
                let text = text_of(element);
                if !text.is_empty() {
                    paragraph = Some(text);
                }
            }
            _ => {
                let text = text_of(element);
                heading = (!text.is_empty()).then_some(text);
                paragraph = None;
            }
        }
    }

    examples
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> Html {
        Html::parse_document(&format!("<html><body>{body}</body></html>"))
    }

    #[test]
    fn test_heading_becomes_title() {
        let doc = parse(
            r#"<h2>Usage</h2>
               <p>Basic button usage</p>
               <pre><code>&lt;Button&gt;Click&lt;/Button&gt;</code></pre>"#,
        );

        let examples = extract_examples(&doc);
        assert_eq!(examples.len(), 1);
        assert_eq!(examples[0].title, "Usage");
        assert_eq!(examples[0].code, "<Button>Click</Button>");
        assert_eq!(examples[0].description.as_deref(), Some("Basic button usage"));
    }

    #[test]
    fn test_fallback_titles_in_order() {
        let doc = parse(
            r#"<h1>Button</h1>
               <pre>first()</pre>
               <pre>second()</pre>"#,
        );

        let titles: Vec<_> = extract_examples(&doc).into_iter().map(|e| e.title).collect();
        assert_eq!(titles, vec!["Example 1", "Example 2"]);
    }

    #[test]
    fn test_no_description_without_paragraph() {
        let doc = parse("<h3>Variants</h3><pre>code</pre>");
        let examples = extract_examples(&doc);
        assert_eq!(examples[0].title, "Variants");
        assert!(examples[0].description.is_none());
    }

    #[test]
    fn test_paragraph_does_not_leak_across_sections() {
        let doc = parse(
            r#"<h2>Usage</h2><p>About usage</p><pre>a</pre>
               <h2>Sizes</h2><pre>b</pre>"#,
        );

        let examples = extract_examples(&doc);
        assert_eq!(examples[1].title, "Sizes");
        assert!(examples[1].description.is_none());
    }

    #[test]
    fn test_nested_heading_is_found() {
        let doc = parse(
            r#"<section><h2>Loading state</h2></section>
               <div class="demo"><div><pre>loading</pre></div></div>"#,
        );

        let examples = extract_examples(&doc);
        assert_eq!(examples[0].title, "Loading state");
    }

    #[test]
    fn test_code_whitespace_preserved() {
        let doc = parse("<pre>function Demo() {\n  return null;\n}</pre>");
        let examples = extract_examples(&doc);
        assert_eq!(examples[0].code, "function Demo() {\n  return null;\n}");
    }
}

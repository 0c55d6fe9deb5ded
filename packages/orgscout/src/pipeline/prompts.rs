//! LLM prompts for ranking and profile extraction.

use crate::types::profile::PROFILE_FIELDS;

/// Prompt for choosing content pages out of a site's links.
pub const RANK_PROMPT: &str = r#"You are helping research a nonprofit organization from its website.

Below is a numbered list of links found on the organization's home page.
Choose up to {limit} links most likely to contain substantive content about the organization.

Prefer pages about:
- the organization itself (about, mission, history, leadership)
- its programs and services
- its impact (results, stories, annual reports)

Exclude:
- blog posts and news articles
- login, account and donation checkout pages
- privacy policy, terms of service, cookie and other legal pages

Links:
{urls}

Return ONLY a JSON array of the chosen URLs as strings, most relevant first, and nothing else.
Example: ["https://example.org/about", "https://example.org/programs"]"#;

/// Prompt for extracting the organization profile from a page.
pub const EXTRACT_PROFILE_PROMPT: &str = r#"Extract the following fields about the nonprofit organization described on this page:

{fields}

Return ONLY a JSON object with exactly these keys. Use null for any field you cannot find.
Do not include any explanation, prose, or markdown code fences.

Page content:
{content}"#;

/// Format the ranking prompt with 1-based indices.
pub fn format_rank_prompt(urls: &[String], limit: usize) -> String {
    let listing = urls
        .iter()
        .enumerate()
        .map(|(i, url)| format!("{}. {}", i + 1, url))
        .collect::<Vec<_>>()
        .join("\n");

    RANK_PROMPT
        .replace("{limit}", &limit.to_string())
        .replace("{urls}", &listing)
}

/// Format the profile extraction prompt. Page text is appended verbatim.
pub fn format_extract_prompt(page_text: &str) -> String {
    let fields = PROFILE_FIELDS
        .iter()
        .map(|field| format!("- {}: {}", field, field_description(field)))
        .collect::<Vec<_>>()
        .join("\n");

    // Content last so braces inside the page text are never substituted.
    EXTRACT_PROFILE_PROMPT
        .replace("{fields}", &fields)
        .replace("{content}", page_text)
}

fn field_description(field: &str) -> &'static str {
    match field {
        "Name" => "the organization's legal or display name",
        "WebsiteUrl" => "the organization's own website URL",
        "NteeCode" => "the NTEE category code (e.g. P20)",
        "NteeDescription" => "the NTEE category description (e.g. Human Services)",
        "ZipCode" => "the postal code of the organization's address",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_prompt_enumerates_from_one() {
        let urls = vec![
            "https://example.org/about".to_string(),
            "https://example.org/programs".to_string(),
        ];

        let prompt = format_rank_prompt(&urls, 10);

        assert!(prompt.contains("1. https://example.org/about"));
        assert!(prompt.contains("2. https://example.org/programs"));
        assert!(prompt.contains("up to 10 links"));
        assert!(prompt.contains("JSON array"));
        assert!(!prompt.contains("{urls}"));
    }

    #[test]
    fn test_extract_prompt_names_each_field_once() {
        let prompt = format_extract_prompt("Acme Aid serves 10001.");

        for field in PROFILE_FIELDS {
            let marker = format!("- {}:", field);
            assert_eq!(prompt.matches(&marker).count(), 1, "field {}", field);
        }
        assert!(prompt.ends_with("Acme Aid serves 10001."));
    }

    #[test]
    fn test_extract_prompt_keeps_page_text_verbatim() {
        let text = "Literal {fields} and {content} in the page";

        let prompt = format_extract_prompt(text);

        assert!(prompt.ends_with(text));
    }
}

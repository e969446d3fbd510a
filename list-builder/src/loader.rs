use log::warn;
use scraper::{ElementRef, Html, Selector};

use crate::anchor::{parse_anchor_text, parse_percentage, ID_AND_TITLE};
use crate::category::Category;
use crate::entry::Entry;
use crate::error::RowError;

#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRow {
    pub reason: RowError,
    pub text: String,
}

/// Entries parsed from one document, plus the rows that could not be parsed.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub entries: Vec<Entry>,
    pub skipped: Vec<SkippedRow>,
}

impl LoadReport {
    fn skip(&mut self, reason: RowError, text: String) {
        self.skipped.push(SkippedRow { reason, text });
    }
}

/// Load a grouped page: top-level `<details>` sections, each labelled by its
/// `<summary>` and holding `<li>` rows whose link text is one of the known
/// anchor layouts.
pub fn load_grouped(html: &str, source_tag: &str) -> LoadReport {
    let document = Html::parse_document(html);
    let details_selector = Selector::parse("details").unwrap();
    let summary_selector = Selector::parse("summary").unwrap();
    let li_selector = Selector::parse("li").unwrap();
    let a_selector = Selector::parse("a").unwrap();

    let mut report = LoadReport::default();

    for section in document
        .select(&details_selector)
        .filter(|section| !is_nested_section(section))
    {
        let category = match section.select(&summary_selector).next() {
            Some(summary) => Category::from_section_label(&joined_text(summary)),
            None => {
                warn!("Section without summary in {:?}, using Medium", source_tag);
                Category::Medium
            }
        };

        for row in section.select(&li_selector) {
            let Some(link) = row.select(&a_selector).next() else {
                report.skip(RowError::NoLink, joined_text(row));
                continue;
            };

            let text = joined_text(link);
            match parse_anchor_text(&text) {
                Ok(anchor) => report.entries.push(Entry {
                    title: anchor.title,
                    external_id: anchor.external_id,
                    acceptance: anchor.acceptance,
                    href: href_of(link),
                    category,
                    source_tag: source_tag.to_string(),
                }),
                Err(reason) => report.skip(reason, text),
            }
        }
    }

    report
}

/// Load a raw scraped listing where each row's link text spans lines:
/// "1. Two Sum", then somewhere an acceptance line ("55.2%") and a
/// difficulty line ("Easy", "Med.", "Hard").
pub fn load_flat(html: &str, source_tag: &str) -> LoadReport {
    let document = Html::parse_document(html);
    let li_selector = Selector::parse("li").unwrap();
    let a_selector = Selector::parse("a").unwrap();

    let mut report = LoadReport::default();

    for row in document.select(&li_selector) {
        let Some(link) = row.select(&a_selector).next() else {
            report.skip(RowError::NoLink, joined_text(row));
            continue;
        };

        let lines = text_lines(link);
        match flat_row(&lines) {
            Ok((external_id, title, acceptance, category)) => report.entries.push(Entry {
                title,
                external_id,
                acceptance,
                href: href_of(link),
                category,
                source_tag: source_tag.to_string(),
            }),
            Err(reason) => report.skip(reason, lines.join(" ")),
        }
    }

    report
}

fn flat_row(lines: &[String]) -> Result<(String, String, f64, Category), RowError> {
    let first = lines.first().ok_or(RowError::EmptyRow)?;
    let caps = ID_AND_TITLE
        .captures(first)
        .ok_or_else(|| RowError::UnrecognizedLayout(first.clone()))?;

    let acceptance = match lines.iter().find(|line| line.ends_with('%')) {
        Some(line) => parse_percentage(line.trim_end_matches('%'))?,
        None => 0.0,
    };

    let category = lines
        .iter()
        .find_map(|line| Category::from_row_line(line))
        .unwrap_or(Category::Medium);

    Ok((
        caps[1].to_string(),
        caps[2].trim().to_string(),
        acceptance,
        category,
    ))
}

fn is_nested_section(section: &ElementRef) -> bool {
    section.ancestors().any(|node| {
        node.value()
            .as_element()
            .map_or(false, |el| el.name() == "details")
    })
}

fn href_of(link: ElementRef) -> String {
    link.value().attr("href").unwrap_or("#").to_string()
}

/// Text nodes trimmed and joined by a single space.
fn joined_text(el: ElementRef) -> String {
    el.text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Non-empty trimmed lines of the element's text, one per line break or
/// text node.
fn text_lines(el: ElementRef) -> Vec<String> {
    el.text()
        .collect::<Vec<_>>()
        .join("\n")
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const GROUPED: &str = r#"
<html><body>
<h1>Acme LeetCode – 5 problems</h1>
<details open><summary>Easy (2)</summary><ol>
  <li><a href='https://leetcode.com/problems/two-sum/'>Two Sum : 1 | 55.2%</a></li>
  <li><a href='/problems/valid-parentheses/'>2. Valid Parentheses : 20 | 41.0%</a></li>
</ol></details>
<details><summary>Med. (2)</summary><ol>
  <li><a href='/problems/3sum/'>15. 3Sum</a></li>
  <li>no link here</li>
</ol></details>
<details><summary>Hard (2)</summary><ol>
  <li><a href='/problems/median/'>Median of <b>Two</b> Arrays : 4 | 40.1%</a></li>
  <li><a href='/problems/x/'>garbage</a></li>
</ol></details>
</body></html>
"#;

    #[test]
    fn grouped_sections_and_rows() {
        let report = load_grouped(GROUPED, "Acme");

        let ids: Vec<_> = report.entries.iter().map(|e| e.external_id.as_str()).collect();
        assert_eq!(ids, vec!["1", "20", "15", "4"]);

        let categories: Vec<_> = report.entries.iter().map(|e| e.category).collect();
        assert_eq!(
            categories,
            vec![Category::Low, Category::Low, Category::Medium, Category::High]
        );

        let median = &report.entries[3];
        assert_eq!(median.title, "Median of Two Arrays");
        assert_eq!(median.acceptance, 40.1);
        assert_eq!(median.href, "/problems/median/");
        assert_eq!(median.source_tag, "Acme");

        assert_eq!(report.entries[2].acceptance, 0.0);
    }

    #[test]
    fn grouped_skips_are_reported() {
        let report = load_grouped(GROUPED, "Acme");
        assert_eq!(report.skipped.len(), 2);
        assert_eq!(report.skipped[0].reason, RowError::NoLink);
        assert_eq!(
            report.skipped[1].reason,
            RowError::UnrecognizedLayout("garbage".to_string())
        );
    }

    #[test]
    fn nested_sections_are_not_counted_twice() {
        let html = r#"
<details><summary>Hard</summary><ol>
  <li><a href='#'>Two Sum : 1 | 55.2%</a></li>
  <details><summary>Easy</summary><ol>
    <li><a href='#'>Add Two Numbers : 2 | 40.0%</a></li>
  </ol></details>
</ol></details>
"#;
        let report = load_grouped(html, "Acme");
        assert_eq!(report.entries.len(), 2);
        assert!(report.entries.iter().all(|e| e.category == Category::High));
    }

    #[test]
    fn section_without_summary_is_medium() {
        let html = "<details><ol><li><a href='#'>Two Sum : 1 | 55.2%</a></li></ol></details>";
        let report = load_grouped(html, "Acme");
        assert_eq!(report.entries[0].category, Category::Medium);
    }

    #[test]
    fn missing_href_defaults() {
        let html = "<details><summary>Easy</summary><ol><li><a>Two Sum : 1 | 55.2%</a></li></ol></details>";
        let report = load_grouped(html, "Acme");
        assert_eq!(report.entries[0].href, "#");
    }

    const FLAT: &str = r#"
<html><body><ol>
  <li><a href='https://leetcode.com/problems/two-sum/'>1. Two Sum
55.2%
Easy</a></li>
  <li><a href='https://leetcode.com/problems/lru-cache/'><div>146. LRU Cache</div><div>44.0%</div><div>Med.</div></a></li>
  <li><a href='https://leetcode.com/problems/median/'>4. Median of Two Sorted Arrays
Hard</a></li>
  <li><a href='https://leetcode.com/problems/no-diff/'>70. Climbing Stairs
53.0%</a></li>
  <li><a href='#'>Premium only</a></li>
  <li><a href='#'>   </a></li>
  <li><a href='#'>9. Palindrome Number
abc%</a></li>
</ol></body></html>
"#;

    #[test]
    fn flat_rows() {
        let report = load_flat(FLAT, "");
        let got: Vec<_> = report
            .entries
            .iter()
            .map(|e| (e.external_id.as_str(), e.title.as_str(), e.acceptance, e.category))
            .collect();

        assert_eq!(
            got,
            vec![
                ("1", "Two Sum", 55.2, Category::Low),
                ("146", "LRU Cache", 44.0, Category::Medium),
                ("4", "Median of Two Sorted Arrays", 0.0, Category::High),
                ("70", "Climbing Stairs", 53.0, Category::Medium),
            ]
        );
        assert_eq!(report.entries[0].href, "https://leetcode.com/problems/two-sum/");
    }

    #[test]
    fn flat_skips() {
        let report = load_flat(FLAT, "");
        let reasons: Vec<_> = report.skipped.iter().map(|s| s.reason.clone()).collect();
        assert_eq!(
            reasons,
            vec![
                RowError::UnrecognizedLayout("Premium only".to_string()),
                RowError::EmptyRow,
                RowError::BadPercentage("abc".to_string()),
            ]
        );
    }

    #[test]
    fn flat_percentages_must_read_back() {
        let html = r#"
<ol>
  <li><a href='#'>7. Foo
-5.0%
Easy</a></li>
  <li><a href='#'>8. Bar
NaN%
Hard</a></li>
  <li><a href='#'>9. Baz
1e3%</a></li>
  <li><a href='#'>10. Qux
100%</a></li>
</ol>
"#;
        let report = load_flat(html, "");

        let ids: Vec<_> = report.entries.iter().map(|e| e.external_id.as_str()).collect();
        assert_eq!(ids, vec!["10"]);
        assert_eq!(report.entries[0].acceptance, 100.0);

        let reasons: Vec<_> = report.skipped.iter().map(|s| s.reason.clone()).collect();
        assert_eq!(
            reasons,
            vec![
                RowError::BadPercentage("-5.0".to_string()),
                RowError::BadPercentage("NaN".to_string()),
                RowError::BadPercentage("1e3".to_string()),
            ]
        );
    }
}

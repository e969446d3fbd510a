use crate::category::Category;
use crate::entry::{Entry, MergedEntry};
use crate::group::Groups;

const STYLE: &str = "<style>body{font-family:system-ui,Arial;margin:1em}\
details{margin-bottom:1em;border:1px solid #ccc;border-radius:6px;padding:.5em}\
summary{font-size:1.25em;font-weight:bold;cursor:pointer}\
ol{margin-left:1.5em;line-height:1.6}\
a{text-decoration:none;color:#0366d6}\
a:hover{text-decoration:underline}</style>";

const BADGE_STYLE: &str = "display:inline-block;background:#eef;border:1px solid #ccd;\
border-radius:4px;padding:0 4px;margin-right:4px;font-size:.8em";

/// Escape text for use in element content and single- or double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// The merged page across all sources.
pub fn render_master(groups: &Groups<MergedEntry>) -> String {
    let mut out = vec![
        "<!DOCTYPE html>".to_string(),
        format!(
            "<html><head><meta charset='utf-8'><title>Master LeetCode List</title>{}</head><body>",
            STYLE
        ),
        format!("<h1>Master LeetCode List – {} unique problems</h1>", groups.total()),
    ];

    for (category, entries) in groups.iter() {
        out.push(section_open(category, entries.len()));
        for (idx, entry) in entries.iter().enumerate() {
            out.push(format!(
                "<li>{}{}. {} : {} | {:.1}%</a><br>{}</li>",
                link_open(&entry.href),
                idx + 1,
                escape(&entry.title),
                entry.external_id,
                entry.acceptance,
                badges(entry.sources.iter().map(String::as_str))
            ));
        }
        out.push("</ol></details>".to_string());
    }

    out.push("</body></html>".to_string());
    out.join("\n")
}

/// One source's page. Rows use the "title : id | pct%" layout so the page
/// can be fed back in as a merge source.
pub fn render_grouped(company: &str, groups: &Groups<Entry>) -> String {
    let company = escape(company);
    let mut out = vec![
        "<!DOCTYPE html>".to_string(),
        "<html>".to_string(),
        format!(
            "<head><meta charset='utf-8'><title>{} LeetCode – Grouped</title>{}</head><body>",
            company, STYLE
        ),
        format!("<h1>{} LeetCode – {} problems</h1>", company, groups.total()),
    ];

    for (category, entries) in groups.iter() {
        out.push(section_open(category, entries.len()));
        for entry in entries {
            out.push(format!(
                "<li>{}{} : {} | {:.1}%</a></li>",
                link_open(&entry.href),
                escape(&entry.title),
                entry.external_id,
                entry.acceptance
            ));
        }
        out.push("</ol></details>".to_string());
    }

    out.push("</body></html>".to_string());
    out.join("\n")
}

fn section_open(category: Category, count: usize) -> String {
    let open = if category == Category::Low { " open" } else { "" };
    format!(
        "<details{}><summary>{} ({})</summary><ol>",
        open,
        category.display_name(),
        count
    )
}

fn link_open(href: &str) -> String {
    format!("<a href='{}' target='_blank' rel='noopener'>", escape(href))
}

fn badges<'a>(tags: impl Iterator<Item = &'a str>) -> String {
    let mut tags: Vec<_> = tags.collect();
    tags.sort_unstable();
    tags.iter()
        .map(|tag| format!("<span style='{}'>{}</span>", BADGE_STYLE, escape(tag)))
        .collect::<Vec<_>>()
        .join(" ")
}

use std::collections::HashMap;
use std::fs;

use log::{debug, info};

use crate::discover::SourceFile;
use crate::entry::{Entry, MergedEntry};
use crate::error::BuildError;
use crate::loader::load_grouped;

/// Counters describing one merge run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MergeStats {
    pub sources: usize,
    pub rows: usize,
    pub skipped_rows: usize,
    /// Repeat sightings whose title or category disagreed with the stored one.
    pub conflicts: usize,
}

/// Problems keyed by id across all sources, in first-seen order.
#[derive(Debug, Default)]
pub struct Merger {
    entries: Vec<MergedEntry>,
    index: HashMap<String, usize>,
    stats: MergeStats,
}

impl Merger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse one grouped page and fold its rows in.
    pub fn add_document(&mut self, html: &str, source_tag: &str) {
        let report = load_grouped(html, source_tag);
        info!(
            "{}: {} rows, {} skipped",
            source_tag,
            report.entries.len(),
            report.skipped.len()
        );

        for row in &report.skipped {
            debug!("{}: skipped row {:?}: {}", source_tag, row.text, row.reason);
        }

        self.stats.sources += 1;
        self.stats.skipped_rows += report.skipped.len();
        for entry in report.entries {
            self.add(entry);
        }
    }

    pub fn add(&mut self, entry: Entry) {
        self.stats.rows += 1;

        match self.index.get(&entry.external_id).copied() {
            Some(i) => {
                let stored = &mut self.entries[i];
                if stored.title != entry.title || stored.category != entry.category {
                    debug!(
                        "Problem {} from {} disagrees with first sighting ({:?}/{:?} vs {:?}/{:?}), keeping first",
                        entry.external_id,
                        entry.source_tag,
                        stored.title,
                        stored.category,
                        entry.title,
                        entry.category
                    );
                    self.stats.conflicts += 1;
                }
                fold_repeat(stored, entry);
            }
            None => {
                self.index.insert(entry.external_id.clone(), self.entries.len());
                self.entries.push(MergedEntry::from_entry(entry));
            }
        }
    }

    pub fn stats(&self) -> &MergeStats {
        &self.stats
    }

    pub fn into_entries(self) -> Vec<MergedEntry> {
        self.entries
    }
}

/// Field policy for a repeat sighting of an id:
/// title, href and category keep the first value seen,
/// acceptance keeps the maximum, sources are unioned.
fn fold_repeat(stored: &mut MergedEntry, repeat: Entry) {
    stored.acceptance = stored.acceptance.max(repeat.acceptance);
    stored.sources.insert(repeat.source_tag);
}

/// Read every source file in order and merge them.
pub fn merge_sources(sources: &[SourceFile]) -> Result<Merger, BuildError> {
    let mut merger = Merger::new();
    for source in sources {
        let html = fs::read_to_string(&source.path).map_err(|e| BuildError::io(&source.path, e))?;
        merger.add_document(&html, &source.tag);
    }
    Ok(merger)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;

    fn entry(id: &str, title: &str, acceptance: f64, category: Category, tag: &str) -> Entry {
        Entry {
            title: title.to_string(),
            external_id: id.to_string(),
            acceptance,
            href: format!("/problems/{}/", id),
            category,
            source_tag: tag.to_string(),
        }
    }

    #[test]
    fn duplicate_ids_keep_max_acceptance() {
        let mut merger = Merger::new();
        merger.add(entry("1", "Two Sum", 40.0, Category::Low, "Amazon"));
        merger.add(entry("1", "Two Sum", 55.2, Category::Low, "Google"));

        let entries = merger.into_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].acceptance, 55.2);
        assert_eq!(entries[0].sources.len(), 2);
    }

    #[test]
    fn lower_acceptance_does_not_overwrite() {
        let mut merger = Merger::new();
        merger.add(entry("1", "Two Sum", 55.2, Category::Low, "Amazon"));
        merger.add(entry("1", "Two Sum", 40.0, Category::Low, "Amazon"));

        let entries = merger.into_entries();
        assert_eq!(entries[0].acceptance, 55.2);
        assert_eq!(entries[0].sources.len(), 1);
    }

    #[test]
    fn first_seen_title_and_category_win() {
        let mut merger = Merger::new();
        merger.add(entry("1", "Two Sum", 40.0, Category::Low, "Amazon"));
        merger.add(entry("1", "2Sum", 50.0, Category::High, "Google"));

        assert_eq!(merger.stats().conflicts, 1);
        let entries = merger.into_entries();
        assert_eq!(entries[0].title, "Two Sum");
        assert_eq!(entries[0].category, Category::Low);
        assert_eq!(entries[0].href, "/problems/1/");
        assert_eq!(entries[0].acceptance, 50.0);
    }

    #[test]
    fn insertion_order_is_kept() {
        let mut merger = Merger::new();
        for id in ["42", "7", "1", "7"] {
            merger.add(entry(id, "x", 1.0, Category::Medium, "Acme"));
        }
        let ids: Vec<_> = merger.into_entries().into_iter().map(|e| e.external_id).collect();
        assert_eq!(ids, vec!["42", "7", "1"]);
    }

    #[test]
    fn documents_from_two_sources() {
        let amazon = "<details><summary>Easy (1)</summary><ol>\
            <li><a href='/p/two-sum'>1. Two Sum : 1 | 40.0%</a></li>\
            <li>broken</li></ol></details>";
        let google = "<details><summary>Easy (1)</summary><ol>\
            <li><a href='/p/two-sum'>Two Sum : 1 | 55.2%</a></li></ol></details>";

        let mut merger = Merger::new();
        merger.add_document(amazon, "Amazon");
        merger.add_document(google, "Google");

        assert_eq!(
            merger.stats(),
            &MergeStats {
                sources: 2,
                rows: 2,
                skipped_rows: 1,
                conflicts: 0,
            }
        );

        let entries = merger.into_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].acceptance, 55.2);
        let tags: Vec<_> = entries[0].sources.iter().cloned().collect();
        assert_eq!(tags, vec!["Amazon", "Google"]);
    }
}

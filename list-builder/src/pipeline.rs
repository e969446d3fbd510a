use log::{debug, info};

use crate::discover::{discover_sources, SourceQuery};
use crate::entry::{Entry, MergedEntry};
use crate::error::BuildError;
use crate::group::Groups;
use crate::loader::load_flat;
use crate::merge::{merge_sources, MergeStats};
use crate::render::{render_grouped, render_master};

/// One company's scraped listing, grouped.
#[derive(Debug)]
pub struct GroupedListing {
    pub groups: Groups<Entry>,
    pub skipped_rows: usize,
}

impl GroupedListing {
    pub fn render(&self, company: &str) -> String {
        render_grouped(company, &self.groups)
    }
}

pub fn group_listing(html: &str) -> GroupedListing {
    let report = load_flat(html, "");
    for row in &report.skipped {
        debug!("Skipped row {:?}: {}", row.text, row.reason);
    }

    GroupedListing {
        skipped_rows: report.skipped.len(),
        groups: Groups::new(report.entries),
    }
}

/// Every source merged, grouped and sorted.
#[derive(Debug)]
pub struct MasterList {
    pub groups: Groups<MergedEntry>,
    pub stats: MergeStats,
}

impl MasterList {
    pub fn render(&self) -> String {
        render_master(&self.groups)
    }

    /// Entries in page order.
    pub fn entries(&self) -> Vec<&MergedEntry> {
        self.groups.iter().flat_map(|(_, entries)| entries).collect()
    }
}

pub fn build_master(query: &SourceQuery) -> Result<MasterList, BuildError> {
    let sources = discover_sources(query)?;
    info!(
        "Found {} source files under {}",
        sources.len(),
        query.base_dir.display()
    );

    let merger = merge_sources(&sources)?;
    let stats = merger.stats().clone();

    Ok(MasterList {
        groups: Groups::new(merger.into_entries()),
        stats,
    })
}

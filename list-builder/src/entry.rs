use std::collections::BTreeSet;

use serde::Serialize;

use crate::category::Category;

/// One problem as listed by one source document.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub title: String,
    pub external_id: String,
    pub acceptance: f64,
    pub href: String,
    pub category: Category,
    pub source_tag: String,
}

/// A problem aggregated across every source that lists it.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct MergedEntry {
    pub title: String,
    pub external_id: String,
    pub href: String,
    pub acceptance: f64,
    pub category: Category,
    pub sources: BTreeSet<String>,
}

impl MergedEntry {
    pub fn from_entry(entry: Entry) -> Self {
        MergedEntry {
            title: entry.title,
            external_id: entry.external_id,
            href: entry.href,
            acceptance: entry.acceptance,
            category: entry.category,
            sources: BTreeSet::from([entry.source_tag]),
        }
    }
}

/// Anything the grouper can bucket and rank.
pub trait Ranked {
    fn category(&self) -> Category;
    fn acceptance(&self) -> f64;
}

impl Ranked for Entry {
    fn category(&self) -> Category {
        self.category
    }

    fn acceptance(&self) -> f64 {
        self.acceptance
    }
}

impl Ranked for MergedEntry {
    fn category(&self) -> Category {
        self.category
    }

    fn acceptance(&self) -> f64 {
        self.acceptance
    }
}

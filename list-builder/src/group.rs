use crate::category::Category;
use crate::entry::Ranked;

/// Items bucketed by category, each bucket sorted by acceptance descending.
#[derive(Debug)]
pub struct Groups<T> {
    buckets: [Vec<T>; 3],
}

impl<T: Ranked> Groups<T> {
    pub fn new(items: impl IntoIterator<Item = T>) -> Self {
        let mut buckets: [Vec<T>; 3] = Default::default();
        for item in items {
            buckets[slot(item.category())].push(item);
        }

        // sort_by is stable: ties keep insertion order
        for bucket in &mut buckets {
            bucket.sort_by(|a, b| b.acceptance().total_cmp(&a.acceptance()));
        }

        Groups { buckets }
    }
}

impl<T> Groups<T> {
    pub fn get(&self, category: Category) -> &[T] {
        &self.buckets[slot(category)]
    }

    pub fn total(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// Buckets in render order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[T])> + '_ {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

fn slot(category: Category) -> usize {
    match category {
        Category::Low => 0,
        Category::Medium => 1,
        Category::High => 2,
    }
}

//! Selection tracking, independent of filter and page.

/// Ordered set of selected member ids.
///
/// Insertion order is preserved so unrelated entries never move or duplicate
/// when one id is toggled off. The set is deliberately NOT pruned when the
/// raw set is replaced; stale ids are harmless and simply never match a
/// rendered row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: Vec<u64>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_selected(&self, id: u64) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected ids in insertion order.
    pub fn ids(&self) -> &[u64] {
        &self.ids
    }

    /// Flips membership of `id`. All other selected ids keep their relative
    /// order. Ids not present in the raw set are accepted without special
    /// handling.
    pub fn toggle(&mut self, id: u64) {
        match self.ids.iter().position(|&x| x == id) {
            Some(pos) => {
                self.ids.remove(pos);
            }
            None => self.ids.push(id),
        }
    }

    /// Replaces the selection with the given ids (select-all semantics:
    /// callers pass every id in the raw set, not just the visible page).
    pub fn select_all<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = u64>,
    {
        self.ids = ids.into_iter().collect();
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

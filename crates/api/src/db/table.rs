//! A single in-memory entity table.

use tuber_treats_core::Entity;

/// Insertion-ordered collection of one entity kind.
///
/// Lookups are linear scans. Ids come from a per-table counter starting at 1
/// and are never handed out twice, even after removals.
#[derive(Debug, Clone)]
pub struct Table<T> {
    rows: Vec<T>,
    next_id: i32,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
        }
    }
}

impl<T: Entity + Clone> Table<T> {
    /// All rows in insertion order.
    #[must_use]
    pub fn list(&self) -> &[T] {
        &self.rows
    }

    /// Iterate over all rows in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.rows.iter()
    }

    /// Find a row by id.
    #[must_use]
    pub fn find(&self, id: T::Id) -> Option<&T> {
        self.rows.iter().find(|row| row.id() == id)
    }

    /// Find a row by id for in-place update.
    pub fn find_mut(&mut self, id: T::Id) -> Option<&mut T> {
        self.rows.iter_mut().find(|row| row.id() == id)
    }

    /// Returns `true` if a row with `id` exists.
    #[must_use]
    pub fn contains(&self, id: T::Id) -> bool {
        self.find(id).is_some()
    }

    /// Assign the next id, build the row with it, and append it.
    ///
    /// Returns a copy of the stored row.
    pub fn add(&mut self, build: impl FnOnce(T::Id) -> T) -> T {
        let id = T::Id::from(self.next_id);
        self.next_id += 1;

        let row = build(id);
        self.rows.push(row.clone());
        row
    }

    /// Remove the row with `id`, preserving the order of the others.
    pub fn remove(&mut self, id: T::Id) -> Option<T> {
        let index = self.rows.iter().position(|row| row.id() == id)?;
        Some(self.rows.remove(index))
    }

    /// Remove the first row matching `predicate`.
    pub fn remove_first(&mut self, predicate: impl Fn(&T) -> bool) -> Option<T> {
        let index = self.rows.iter().position(predicate)?;
        Some(self.rows.remove(index))
    }

    /// Remove every row matching `predicate`, returning how many were removed.
    pub fn remove_where(&mut self, predicate: impl Fn(&T) -> bool) -> usize {
        let before = self.rows.len();
        self.rows.retain(|row| !predicate(row));
        before - self.rows.len()
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

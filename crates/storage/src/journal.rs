//! Append-only journal for records without an identity key.
//!
//! Entries keep their insertion order forever. There is no removal and
//! no update; the journal is history.

/// Append-only record sequence.
#[derive(Debug, Clone)]
pub struct Journal<T> {
    entries: Vec<T>,
}

impl<T> Default for Journal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Journal<T> {
    pub fn new() -> Self {
        Journal { entries: Vec::new() }
    }

    /// Rebuild a journal from entries loaded off disk, keeping their
    /// persisted order.
    pub fn from_entries(entries: Vec<T>) -> Self {
        Journal { entries }
    }

    /// Append one entry.
    pub fn push(&mut self, entry: T) {
        self.entries.push(entry);
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_preserves_insertion_order() {
        let mut journal = Journal::new();
        journal.push("first");
        journal.push("second");
        journal.push("third");
        assert_eq!(journal.entries(), &["first", "second", "third"]);
        assert_eq!(journal.len(), 3);
    }

    #[test]
    fn test_duplicate_entries_are_allowed() {
        let mut journal = Journal::new();
        journal.push(7);
        journal.push(7);
        assert_eq!(journal.entries(), &[7, 7]);
    }

    #[test]
    fn test_from_entries_round_trip() {
        let journal = Journal::from_entries(vec![3, 1, 2]);
        // Loaded order is kept verbatim, not sorted.
        assert_eq!(journal.entries(), &[3, 1, 2]);
    }

    #[test]
    fn test_empty_journal() {
        let journal: Journal<u32> = Journal::new();
        assert!(journal.is_empty());
        assert_eq!(journal.iter().count(), 0);
    }
}

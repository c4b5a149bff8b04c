use std::ops::Range;

/// Identity of one committed category row. Two rows with the same name
/// have different ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct EntryId(u64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct CategoryEntry {
    pub id: EntryId,
    pub name: String,
}

/// Ordered categories for one photo. Duplicates are allowed; insertion
/// order is display order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct CategoryList {
    entries: Vec<CategoryEntry>,
    next_id: u64,
}

impl CategoryList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the list from a newline-separated value, e.g. one re-rendered
    /// by the server after a failed submit.
    pub fn from_serialized(blob: &str) -> Self {
        let mut list = Self::new();
        list.add_lines(blob);
        list
    }

    /// Surrounding whitespace is dropped; a blank name is a no-op.
    pub fn add(&mut self, name: &str) -> Option<EntryId> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        let id = EntryId(self.next_id);
        self.next_id += 1;
        self.entries.push(CategoryEntry {
            id,
            name: name.to_string(),
        });
        Some(id)
    }

    /// One independent [`Self::add`] per line, in order.
    pub fn add_lines(&mut self, text: &str) -> Vec<EntryId> {
        text.split('\n')
            .filter_map(|line| self.add(line.strip_suffix('\r').unwrap_or(line)))
            .collect()
    }

    /// Removes exactly the entry with this id; other entries with the same
    /// name stay.
    pub fn remove(&mut self, id: EntryId) -> Option<CategoryEntry> {
        let pos = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(pos))
    }

    pub fn entries(&self) -> &[CategoryEntry] {
        &self.entries
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Handles a paste into the entry field. Single-line text returns `None`
    /// and changes nothing, so the browser inserts it as typing. Otherwise
    /// `pasted` replaces `selection` (byte offsets into `entry`), every line
    /// of the result is added, and the new entry text is returned.
    pub fn paste(&mut self, entry: &str, selection: Range<usize>, pasted: &str) -> Option<String> {
        if !pasted.contains('\n') {
            return None;
        }

        let start = selection.start.min(entry.len());
        let end = selection.end.clamp(start, entry.len());
        let text = match (entry.get(..start), entry.get(end..)) {
            (Some(before), Some(after)) => format!("{before}{pasted}{after}"),
            _ => format!("{entry}{pasted}"),
        };

        self.add_lines(&text);
        Some(String::new())
    }

    /// Adds whatever is still typed in the entry field and returns the value
    /// the form should submit.
    pub fn commit_pending(&mut self, entry: &str) -> String {
        self.add(entry);
        self.serialized()
    }

    /// The value submitted with the form: one name per line.
    pub fn serialized(&self) -> String {
        self.names().collect::<Vec<_>>().join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_appends_in_order() {
        let mut list = CategoryList::new();
        list.add("Tower Bridge");
        list.add("Bridges in London");
        assert_eq!(
            list.names().collect::<Vec<_>>(),
            vec!["Tower Bridge", "Bridges in London"]
        );
        assert_eq!(list.serialized(), "Tower Bridge\nBridges in London");
    }

    #[test]
    fn test_add_empty_is_noop() {
        let mut list = CategoryList::new();
        list.add("A");
        let before = list.clone();

        assert!(list.add("").is_none());
        assert!(list.add("   ").is_none());
        assert_eq!(list, before);
        assert_eq!(list.serialized(), "A");
    }

    #[test]
    fn test_add_lines_adds_each_line() {
        let mut list = CategoryList::new();
        let ids = list.add_lines("A\nB\nC");
        assert_eq!(ids.len(), 3);
        assert_eq!(list.names().collect::<Vec<_>>(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_add_lines_skips_blank_and_strips_crlf() {
        let mut list = CategoryList::new();
        list.add_lines("A\r\n\r\nB\n\n");
        assert_eq!(list.serialized(), "A\nB");
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut list = CategoryList::new();
        let a = list.add("A").expect("added");
        let b = list.add("A").expect("added");
        assert_ne!(a, b);
        assert_eq!(list.entries().len(), 2);
    }

    #[test]
    fn test_remove_is_by_identity() {
        let mut list = CategoryList::new();
        list.add("A");
        let second_a = list.add("A").expect("added");
        list.add("B");

        let removed = list.remove(second_a).expect("present");
        assert_eq!(removed.name, "A");
        assert_eq!(list.serialized(), "A\nB");
        assert!(list.entries().iter().all(|e| e.id != second_a));
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut list = CategoryList::new();
        let a = list.add("A").expect("added");
        list.remove(a);
        assert!(list.remove(a).is_none());
        assert!(list.entries().is_empty());
        assert_eq!(list.serialized(), "");
    }

    #[test]
    fn test_ids_are_not_reused_after_remove() {
        let mut list = CategoryList::new();
        let a = list.add("A").expect("added");
        list.remove(a);
        let b = list.add("A").expect("added");
        assert_ne!(a, b);
    }

    #[test]
    fn test_from_serialized() {
        let list = CategoryList::from_serialized("Aircraft in Mali\nAircraft in Malawi\n");
        assert_eq!(list.entries().len(), 2);
        assert_eq!(list.serialized(), "Aircraft in Mali\nAircraft in Malawi");
    }

    #[test]
    fn test_paste_lines_adds_each_and_clears_entry() {
        let mut list = CategoryList::new();
        let rest = list.paste("", 0..0, "A\nB\nC");
        assert_eq!(rest.as_deref(), Some(""));
        assert_eq!(list.names().collect::<Vec<_>>(), vec!["A", "B", "C"]);
        assert_eq!(list.serialized(), "A\nB\nC");
    }

    #[test]
    fn test_paste_single_line_is_left_to_browser() {
        let mut list = CategoryList::new();
        assert!(list.paste("Air", 3..3, "craft").is_none());
        assert!(list.entries().is_empty());
    }

    #[test]
    fn test_paste_at_caret_joins_typed_text() {
        let mut list = CategoryList::new();
        let rest = list.paste("Bridges in ", 11..11, "London\nTower Bridge");
        assert_eq!(rest.as_deref(), Some(""));
        assert_eq!(list.serialized(), "Bridges in London\nTower Bridge");
    }

    #[test]
    fn test_paste_replaces_selection() {
        let mut list = CategoryList::new();
        list.paste("Foo", 0..3, "A\nB");
        assert_eq!(list.serialized(), "A\nB");

        let mut list = CategoryList::new();
        list.paste("xFooy", 1..4, "A\nB");
        assert_eq!(list.serialized(), "xA\nBy");
    }

    #[test]
    fn test_paste_with_out_of_range_selection_appends() {
        let mut list = CategoryList::new();
        list.paste("Foo", 7..9, "A\nB");
        assert_eq!(list.serialized(), "FooA\nB");
    }

    #[test]
    fn test_commit_pending_adds_typed_text() {
        let mut list = CategoryList::from_serialized("Tower Bridge");
        let value = list.commit_pending("  Bridges in London ");
        assert_eq!(value, "Tower Bridge\nBridges in London");
        assert_eq!(list.entries().len(), 2);
    }

    #[test]
    fn test_commit_pending_blank_entry_keeps_list() {
        let mut list = CategoryList::from_serialized("A\nB");
        assert_eq!(list.commit_pending("   "), "A\nB");
        assert_eq!(list.entries().len(), 2);
    }
}

//! # Packing List Store
//!
//! Append-only, in-memory list of validated items for one session.
//!
//! `add()` is the only mutation. It either appends exactly one item or
//! leaves the list untouched and reports the first rule that failed:
//!
//! ```text
//! 1. name.trim() is empty      → EmptyName
//! 2. category.trim() is empty  → EmptyCategory
//! 3. quantity is not an i32    → InvalidQuantity
//! ```
//!
//! Text fields are stored trimmed. Quantity is trimmed before parsing and
//! has no range check, so `0` and negative counts are accepted.

use log::debug;

use crate::core::item::{AddOutcome, DraftEntry, PackingItem, ValidationError};

#[derive(Debug, Default)]
pub struct PackingListStore {
    items: Vec<PackingItem>,
}

impl PackingListStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `draft` and append it on success.
    ///
    /// The draft is only read; the store keeps its own copy of the values.
    pub fn add(&mut self, draft: &DraftEntry) -> Result<(), ValidationError> {
        let item = validate(draft)?;
        debug!("Appending item #{}: {}", self.items.len() + 1, item);
        self.items.push(item);
        Ok(())
    }

    /// Four-string form of [`add`](Self::add) for callers that don't hold a draft.
    pub fn add_fields(
        &mut self,
        name: &str,
        category: &str,
        quantity_text: &str,
        comments: &str,
    ) -> AddOutcome {
        self.add(&DraftEntry::new(name, category, quantity_text, comments))
            .into()
    }

    /// Current contents in insertion order.
    pub fn items(&self) -> &[PackingItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all quantities. Widened so negative and large counts can't overflow.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|item| i64::from(item.quantity())).sum()
    }
}

fn validate(draft: &DraftEntry) -> Result<PackingItem, ValidationError> {
    let name = draft.name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    let category = draft.category.trim();
    if category.is_empty() {
        return Err(ValidationError::EmptyCategory);
    }

    let quantity = draft
        .quantity
        .trim()
        .parse::<i32>()
        .map_err(|_| ValidationError::InvalidQuantity)?;

    Ok(PackingItem::new(
        name.to_string(),
        category.to_string(),
        quantity,
        draft.comments.trim().to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, category: &str, quantity: &str, comments: &str) -> DraftEntry {
        DraftEntry::new(name, category, quantity, comments)
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = PackingListStore::new();
        assert!(store.is_empty());
        assert!(store.items().is_empty());
        assert_eq!(store.total_quantity(), 0);
    }

    #[test]
    fn test_add_valid_item() {
        let mut store = PackingListStore::new();
        assert_eq!(store.add(&draft("Tent", "Shelter", "1", "Keep dry")), Ok(()));

        let items = store.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name(), "Tent");
        assert_eq!(items[0].category(), "Shelter");
        assert_eq!(items[0].quantity(), 1);
        assert_eq!(items[0].comments(), "Keep dry");
    }

    #[test]
    fn test_blank_name_wins_over_other_failures() {
        let mut store = PackingListStore::new();
        assert_eq!(
            store.add(&draft("   ", "", "abc", "")),
            Err(ValidationError::EmptyName)
        );
        assert_eq!(
            store.add(&draft("\t\n", "Gear", "3", "")),
            Err(ValidationError::EmptyName)
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_blank_category_checked_before_quantity() {
        let mut store = PackingListStore::new();
        assert_eq!(
            store.add(&draft("Rope", "  ", "two", "")),
            Err(ValidationError::EmptyCategory)
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_non_numeric_quantity_rejected() {
        let mut store = PackingListStore::new();
        for bad in ["two", "", "  ", "1.5", "3 pairs", "99999999999"] {
            assert_eq!(
                store.add(&draft("Rope", "Gear", bad, "")),
                Err(ValidationError::InvalidQuantity),
                "quantity {bad:?} should be rejected"
            );
        }
        assert!(store.is_empty());
    }

    #[test]
    fn test_zero_and_negative_quantity_accepted() {
        let mut store = PackingListStore::new();
        assert_eq!(store.add(&draft("Map", "Nav", "0", "")), Ok(()));
        assert_eq!(store.add(&draft("Debt", "Misc", "-2", "")), Ok(()));
        assert_eq!(store.items()[1].quantity(), -2);
        assert_eq!(store.total_quantity(), -2);
    }

    #[test]
    fn test_fields_stored_trimmed() {
        let mut store = PackingListStore::new();
        store
            .add(&draft("  Socks ", " Clothes", " 4 ", "  wool  "))
            .unwrap();
        let item = &store.items()[0];
        assert_eq!(item.name(), "Socks");
        assert_eq!(item.category(), "Clothes");
        assert_eq!(item.quantity(), 4);
        assert_eq!(item.comments(), "wool");
    }

    #[test]
    fn test_blank_comments_stored_empty() {
        let mut store = PackingListStore::new();
        store.add(&draft("Stove", "Kitchen", "1", "   ")).unwrap();
        assert_eq!(store.items()[0].comments(), "");
    }

    #[test]
    fn test_duplicates_kept_in_order() {
        let mut store = PackingListStore::new();
        store.add(&draft("Sock", "Clothes", "2", "")).unwrap();
        store.add(&draft("Hat", "Clothes", "1", "")).unwrap();
        store.add(&draft("Sock", "Clothes", "2", "")).unwrap();

        let names: Vec<&str> = store.items().iter().map(|i| i.name()).collect();
        assert_eq!(names, ["Sock", "Hat", "Sock"]);
        assert_eq!(store.items()[0], store.items()[2]);
        assert_eq!(store.total_quantity(), 5);
    }

    #[test]
    fn test_failed_add_leaves_contents_untouched() {
        let mut store = PackingListStore::new();
        store.add(&draft("Tent", "Shelter", "1", "")).unwrap();
        let before = store.items().to_vec();

        assert!(store.add(&draft("Rope", "Gear", "two", "")).is_err());
        assert_eq!(store.items(), before.as_slice());
    }

    #[test]
    fn test_add_fields_outcomes() {
        let mut store = PackingListStore::new();
        assert_eq!(store.add_fields("Tent", "Shelter", "1", "Keep dry"), AddOutcome::Added);
        assert_eq!(store.add_fields("", "Shelter", "1", ""), AddOutcome::EmptyName);
        assert_eq!(store.add_fields("Tent", "", "1", ""), AddOutcome::EmptyCategory);
        assert_eq!(store.add_fields("Rope", "Gear", "two", ""), AddOutcome::InvalidQuantity);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_draft_not_consumed() {
        let mut store = PackingListStore::new();
        let mut form = draft("Lamp", "Light", "1", "");
        store.add(&form).unwrap();

        // Editing the draft afterwards must not reach the stored item
        form.name.push_str(" (spare)");
        assert_eq!(store.items()[0].name(), "Lamp");
    }
}

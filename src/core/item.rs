//! # Packing Items
//!
//! The record types that flow between the form and the store.
//!
//! ```text
//! DraftEntry (raw text, mutable, owned by the UI)
//!     │
//!     ▼  PackingListStore::add()  ── rejects with ValidationError
//!     │
//! PackingItem (validated, immutable, owned by the store)
//! ```

use std::fmt;

/// One field of the entry form. Used to point validation failures at the
/// input that caused them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Category,
    Quantity,
    Comments,
}

impl DraftField {
    /// All fields in form order.
    pub const ALL: [DraftField; 4] = [
        DraftField::Name,
        DraftField::Category,
        DraftField::Quantity,
        DraftField::Comments,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DraftField::Name => "Item Name",
            DraftField::Category => "Category",
            DraftField::Quantity => "Quantity",
            DraftField::Comments => "Comments",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            DraftField::Name => DraftField::Category,
            DraftField::Category => DraftField::Quantity,
            DraftField::Quantity => DraftField::Comments,
            DraftField::Comments => DraftField::Name,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            DraftField::Name => DraftField::Comments,
            DraftField::Category => DraftField::Name,
            DraftField::Quantity => DraftField::Category,
            DraftField::Comments => DraftField::Quantity,
        }
    }
}

/// Unvalidated form input for one item. Quantity is still text here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftEntry {
    pub name: String,
    pub category: String,
    pub quantity: String,
    pub comments: String,
}

impl DraftEntry {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: impl Into<String>,
        comments: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            quantity: quantity.into(),
            comments: comments.into(),
        }
    }

    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Category => &self.category,
            DraftField::Quantity => &self.quantity,
            DraftField::Comments => &self.comments,
        }
    }

    pub fn field_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::Name => &mut self.name,
            DraftField::Category => &mut self.category,
            DraftField::Quantity => &mut self.quantity,
            DraftField::Comments => &mut self.comments,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// A validated entry in the packing list.
///
/// Fields are private: the only way to get one is through
/// `PackingListStore::add`, so every instance satisfies the store invariants
/// (non-empty name and category, integer quantity).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackingItem {
    name: String,
    category: String,
    quantity: i32,
    comments: String,
}

impl PackingItem {
    pub(crate) fn new(name: String, category: String, quantity: i32, comments: String) -> Self {
        Self {
            name,
            category,
            quantity,
            comments,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    pub fn comments(&self) -> &str {
        &self.comments
    }
}

/// `"Tent - Shelter (x1)"`. Comments are rendered separately by the list view.
impl fmt::Display for PackingItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} (x{})", self.name, self.category, self.quantity)
    }
}

/// Why a draft was rejected. Exactly one rule is reported per rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    EmptyName,
    EmptyCategory,
    InvalidQuantity,
}

impl ValidationError {
    /// The form field the user has to fix.
    pub fn field(&self) -> DraftField {
        match self {
            ValidationError::EmptyName => DraftField::Name,
            ValidationError::EmptyCategory => DraftField::Category,
            ValidationError::InvalidQuantity => DraftField::Quantity,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyName => write!(f, "item name must not be empty"),
            ValidationError::EmptyCategory => write!(f, "category must not be empty"),
            ValidationError::InvalidQuantity => write!(f, "quantity must be a whole number"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Flat result of `PackingListStore::add_fields`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    EmptyName,
    EmptyCategory,
    InvalidQuantity,
}

impl From<Result<(), ValidationError>> for AddOutcome {
    fn from(result: Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => AddOutcome::Added,
            Err(ValidationError::EmptyName) => AddOutcome::EmptyName,
            Err(ValidationError::EmptyCategory) => AddOutcome::EmptyCategory,
            Err(ValidationError::InvalidQuantity) => AddOutcome::InvalidQuantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_display_format() {
        let item = PackingItem::new("Tent".into(), "Shelter".into(), 1, "Keep dry".into());
        assert_eq!(item.to_string(), "Tent - Shelter (x1)");
    }

    #[test]
    fn test_field_cycle_wraps() {
        let mut field = DraftField::Name;
        for _ in 0..DraftField::ALL.len() {
            field = field.next();
        }
        assert_eq!(field, DraftField::Name);
        assert_eq!(DraftField::Name.prev(), DraftField::Comments);
    }

    #[test]
    fn test_error_points_at_field() {
        assert_eq!(ValidationError::EmptyName.field(), DraftField::Name);
        assert_eq!(ValidationError::EmptyCategory.field(), DraftField::Category);
        assert_eq!(ValidationError::InvalidQuantity.field(), DraftField::Quantity);
    }

    #[test]
    fn test_draft_field_mut_and_clear() {
        let mut draft = DraftEntry::default();
        draft.field_mut(DraftField::Quantity).push_str("12");
        assert_eq!(draft.field(DraftField::Quantity), "12");

        draft.clear();
        assert_eq!(draft, DraftEntry::default());
    }

    #[test]
    fn test_outcome_from_result() {
        assert_eq!(AddOutcome::from(Ok(())), AddOutcome::Added);
        assert_eq!(
            AddOutcome::from(Err(ValidationError::InvalidQuantity)),
            AddOutcome::InvalidQuantity
        );
    }
}

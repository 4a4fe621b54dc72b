//! # Identifier Generation
//!
//! Every `User` and `Item` gets an opaque, unique string id at creation.
//! Where that id comes from is a capability injected into the
//! constructors, so tests and demos can swap randomness for a counter.
//!
//! ```text
//! ┌───────────────────────┐       ┌──────────────────────────────────────┐
//! │  User::with_ids(..)   │──────►│  IdGenerator::next_id()              │
//! │  Item::with_ids(..)   │       │   ├── UuidGenerator  (UUID v4)       │
//! └───────────────────────┘       │   └── SequentialIdGenerator ("p-N")  │
//!                                 └──────────────────────────────────────┘
//! ```

use std::cell::Cell;

use uuid::Uuid;

/// Source of unique, opaque entity identifiers.
///
/// Implementations must never hand out the same id twice.
pub trait IdGenerator {
    /// Returns a fresh identifier.
    fn next_id(&self) -> String;
}

/// Random UUID v4 ids. The default generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic ids of the form `{prefix}-{n}`, counting from 1.
///
/// ## Example
/// ```rust
/// use basket_core::id::{IdGenerator, SequentialIdGenerator};
///
/// let ids = SequentialIdGenerator::new("item");
/// assert_eq!(ids.next_id(), "item-1");
/// assert_eq!(ids.next_id(), "item-2");
/// ```
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: Cell<u64>,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: Cell::new(1),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> String {
        let n = self.next.get();
        self.next.set(n + 1);
        format!("{}-{}", self.prefix, n)
    }
}

impl<G: IdGenerator + ?Sized> IdGenerator for &G {
    fn next_id(&self) -> String {
        (**self).next_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_uuid_ids_are_valid_and_distinct() {
        let ids: HashSet<String> = (0..100).map(|_| UuidGenerator.next_id()).collect();
        assert_eq!(ids.len(), 100);
        for id in &ids {
            assert!(Uuid::parse_str(id).is_ok());
        }
    }

    #[test]
    fn test_sequential_ids_count_up() {
        let ids = SequentialIdGenerator::new("user");
        assert_eq!(ids.next_id(), "user-1");
        assert_eq!(ids.next_id(), "user-2");
        assert_eq!(ids.next_id(), "user-3");
    }

    #[test]
    fn test_generator_usable_through_reference() {
        fn take(ids: impl IdGenerator) -> String {
            ids.next_id()
        }

        let ids = SequentialIdGenerator::new("x");
        assert_eq!(take(&ids), "x-1");
        assert_eq!(take(&ids), "x-2");
    }
}

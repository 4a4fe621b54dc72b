//! # Domain Types
//!
//! The two entities of the cart model.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐          ┌─────────────────┐                      │
//! │  │      User       │          │      Item       │                      │
//! │  │  ─────────────  │  cart    │  ─────────────  │                      │
//! │  │  id             │─────────►│  id             │                      │
//! │  │  name           │  0..n    │  name           │                      │
//! │  │  age            │  lines   │  price          │                      │
//! │  │  cart           │          │  description    │                      │
//! │  └─────────────────┘          │  quantity       │                      │
//! │                               └─────────────────┘                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Catalog Items vs Cart Lines
//! The same `Item` shape plays two roles:
//! - **Catalog item**: built by [`create_item`], `quantity == 0`
//! - **Cart line**: a clone stored inside a [`Cart`], `quantity >= 1`
//!
//! Both share the `id`; they never share storage. Everything except a cart
//! line's `quantity` is fixed after construction, which is why fields are
//! only reachable through getters.

use serde::Serialize;

use crate::cart::Cart;
use crate::id::{IdGenerator, UuidGenerator};
use crate::money::Price;

// =============================================================================
// Item
// =============================================================================

/// A catalog entry, or (inside a cart) a line with a quantity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    id: String,
    name: String,
    price: Price,
    description: String,
    quantity: u32,
}

impl Item {
    /// Creates a catalog item with a fresh UUID.
    pub fn new(
        name: impl Into<String>,
        price: impl Into<Price>,
        description: impl Into<String>,
    ) -> Self {
        Self::with_ids(&UuidGenerator, name, price, description)
    }

    /// Creates a catalog item, drawing its id from `ids`.
    pub fn with_ids(
        ids: &impl IdGenerator,
        name: impl Into<String>,
        price: impl Into<Price>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: ids.next_id(),
            name: name.into(),
            price: price.into(),
            description: description.into(),
            quantity: 0,
        }
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn price(&self) -> Price {
        self.price
    }

    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// `0` for a catalog item, the held count for a cart line.
    #[inline]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Price {
        self.price * self.quantity
    }

    /// Clones this item as a fresh cart line holding one unit.
    pub(crate) fn to_cart_line(&self) -> Self {
        Self {
            quantity: 1,
            ..self.clone()
        }
    }

    pub(crate) fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }
}

// =============================================================================
// User
// =============================================================================

/// A shopper and their cart.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    id: String,
    name: String,
    age: u32,
    cart: Cart,
}

impl User {
    /// Creates a user with a fresh UUID and an empty cart.
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self::with_ids(&UuidGenerator, name, age)
    }

    /// Creates a user with an empty cart, drawing its id from `ids`.
    pub fn with_ids(ids: &impl IdGenerator, name: impl Into<String>, age: u32) -> Self {
        Self {
            id: ids.next_id(),
            name: name.into(),
            age,
            cart: Cart::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn age(&self) -> u32 {
        self.age
    }

    #[inline]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Mutable access to the cart. Every cart mutator keeps the
    /// one-line-per-id and quantity >= 1 invariants.
    #[inline]
    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }
}

// =============================================================================
// Constructors
// =============================================================================

/// Creates a user with a generated id and an empty cart.
///
/// No validation is performed on `name` or `age`.
pub fn create_user(name: impl Into<String>, age: u32) -> User {
    User::new(name, age)
}

/// Creates a catalog item with a generated id and `quantity == 0`.
///
/// No validation is performed: a negative price is accepted as given.
///
/// ## Example
/// ```rust
/// use basket_core::create_item;
///
/// let water = create_item("1887", 14.0, "A bubbly mineral water");
/// assert_eq!(water.quantity(), 0);
/// assert_eq!(water.price().value(), 14.0);
/// ```
pub fn create_item(
    name: impl Into<String>,
    price: impl Into<Price>,
    description: impl Into<String>,
) -> Item {
    Item::new(name, price, description)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::SequentialIdGenerator;

    #[test]
    fn test_create_user_starts_with_empty_cart() {
        let user = create_user("William T", 26);
        assert_eq!(user.name(), "William T");
        assert_eq!(user.age(), 26);
        assert!(user.cart().is_empty());
        assert!(uuid::Uuid::parse_str(user.id()).is_ok());
    }

    #[test]
    fn test_create_item_is_catalog_item() {
        let item = create_item("Grapefruit", 4.0, "A bittersweet citrus");
        assert_eq!(item.name(), "Grapefruit");
        assert_eq!(item.price(), Price::new(4.0));
        assert_eq!(item.description(), "A bittersweet citrus");
        assert_eq!(item.quantity(), 0);
        assert!(item.line_total().is_zero());
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = create_item("A", 1.0, "");
        let b = create_item("A", 1.0, "");
        assert_ne!(a.id(), b.id());
        assert_ne!(create_user("u", 1).id(), create_user("u", 1).id());
    }

    #[test]
    fn test_injected_id_generator() {
        let ids = SequentialIdGenerator::new("id");
        let user = User::with_ids(&ids, "William T", 26);
        let item = Item::with_ids(&ids, "1887", 14.0, "A bubbly mineral water");
        assert_eq!(user.id(), "id-1");
        assert_eq!(item.id(), "id-2");
    }

    #[test]
    fn test_negative_price_is_not_rejected() {
        let item = create_item("Refund", -5.0, "");
        assert_eq!(item.price().value(), -5.0);
    }

    #[test]
    fn test_cart_line_is_a_copy() {
        let item = create_item("Lions Mane", 12.0, "A strange yet, tasty white mushroom");
        let mut line = item.to_cart_line();
        line.set_quantity(7);

        assert_eq!(line.id(), item.id());
        assert_eq!(line.quantity(), 7);
        assert_eq!(item.quantity(), 0);
    }
}

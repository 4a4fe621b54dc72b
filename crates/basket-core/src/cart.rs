//! # Cart
//!
//! The cart held by every [`User`], and the operations that mutate and
//! query it.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Operation                      Cart Change                             │
//! │  ─────────                      ───────────                             │
//! │                                                                         │
//! │  add_to_cart(item) ──────────► line.qty += 1   or  push(copy, qty 1)    │
//! │                                                                         │
//! │  remove_from_cart(item) ─────► retain(id != item.id)                    │
//! │                                                                         │
//! │  remove_quantity_from_cart ──► line.qty -= n   or  remove line          │
//! │    (item, n)                   (when qty <= n)                          │
//! │                                                                         │
//! │  cart_total / print_cart ────► (read only)                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Lines are unique by `id` (adding the same item bumps its quantity)
//! - Every line has quantity >= 1 (a line reaching zero is removed)
//! - Lines keep insertion order, which is the display order
//!
//! Lookups are linear scans over a `Vec`; carts stay small.

use std::io::{self, Write};

use serde::Serialize;
use tracing::{debug, trace};

use crate::error::CoreResult;
use crate::money::Price;
use crate::types::{Item, User};

// =============================================================================
// Cart
// =============================================================================

/// An ordered list of cart lines, at most one per item id.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Cart {
    items: Vec<Item>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of `item`.
    ///
    /// ## Behavior
    /// - If a line with the same id exists: its quantity goes up by one
    /// - Otherwise: a copy of `item` is appended with quantity 1
    ///
    /// `item` itself is never modified.
    pub fn add(&mut self, item: &Item) {
        if let Some(line) = self.line_mut(item.id()) {
            let quantity = line.quantity().saturating_add(1);
            line.set_quantity(quantity);
            debug!(item_id = %item.id(), quantity, "Incremented cart line");
            return;
        }

        self.items.push(item.to_cart_line());
        debug!(item_id = %item.id(), "Added new cart line");
    }

    /// Removes the line for `id`, whatever its quantity.
    ///
    /// ## Returns
    /// `true` if a line was removed, `false` if none matched (a no-op).
    pub fn remove(&mut self, id: &str) -> bool {
        let initial_len = self.items.len();
        self.items.retain(|line| line.id() != id);

        let removed = self.items.len() != initial_len;
        if removed {
            debug!(item_id = %id, "Removed cart line");
        } else {
            trace!(item_id = %id, "No cart line to remove");
        }
        removed
    }

    /// Takes `quantity` units off the line for `id`.
    ///
    /// ## Behavior
    /// - No line for `id`: no-op
    /// - Line quantity <= `quantity`: the whole line is removed
    /// - Otherwise: the line quantity is decremented in place
    ///
    /// A `quantity` of zero leaves the line as it is.
    pub fn remove_quantity(&mut self, id: &str, quantity: u32) {
        let Some(line) = self.line_mut(id) else {
            trace!(item_id = %id, "No cart line to decrement");
            return;
        };

        if quantity == 0 {
            trace!(item_id = %id, "Zero quantity, cart line unchanged");
            return;
        }

        if line.quantity() <= quantity {
            self.remove(id);
        } else {
            let remaining = line.quantity() - quantity;
            line.set_quantity(remaining);
            debug!(item_id = %id, removed = quantity, remaining, "Decremented cart line");
        }
    }

    /// Clears all lines from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns the line for `id`, if present.
    pub fn line(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|line| line.id() == id)
    }

    fn line_mut(&mut self, id: &str) -> Option<&mut Item> {
        self.items.iter_mut().find(|line| line.id() == id)
    }

    /// Iterates lines in cart order.
    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    /// Returns the number of distinct lines in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity of all lines.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity())).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of `price × quantity` over all lines, in cart order.
    pub fn total(&self) -> Price {
        self.items.iter().map(Item::line_total).sum()
    }

    /// Writes the `User Cart:` header and one line per entry.
    pub fn write_listing<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "User Cart:")?;
        for line in &self.items {
            writeln!(
                out,
                "- {} ({}$) - Quantity: {}",
                line.name(),
                line.price(),
                line.quantity()
            )?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Cart totals summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    pub item_count: usize,
    pub total_quantity: u64,
    pub total: Price,
}

impl From<&Cart> for CartSummary {
    fn from(cart: &Cart) -> Self {
        CartSummary {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            total: cart.total(),
        }
    }
}

// =============================================================================
// User-Facing Operations
// =============================================================================

/// Adds one unit of `item` to the user's cart.
pub fn add_to_cart(item: &Item, user: &mut User) {
    user.cart_mut().add(item);
}

/// Removes the user's cart line for `item`, whatever its quantity.
/// A missing line is a no-op.
pub fn remove_from_cart(item: &Item, user: &mut User) {
    user.cart_mut().remove(item.id());
}

/// Takes `quantity` units of `item` out of the user's cart, removing the
/// line once nothing would be left. A missing line or a zero quantity is
/// a no-op.
pub fn remove_quantity_from_cart(item: &Item, quantity: u32, user: &mut User) {
    user.cart_mut().remove_quantity(item.id(), quantity);
}

/// Total price of the user's cart. `0` for an empty cart.
pub fn cart_total(user: &User) -> f64 {
    user.cart().total().value()
}

/// Writes the user's cart listing to `out`.
pub fn write_cart<W: Write>(user: &User, out: &mut W) -> CoreResult<()> {
    user.cart().write_listing(out)?;
    Ok(())
}

/// Prints the user's cart listing to stdout.
pub fn print_cart(user: &User) -> CoreResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_cart(user, &mut out)
}

// =============================================================================
// Unit Tests
// =============================================================================

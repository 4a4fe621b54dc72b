//! # basket-core: Cart Logic
//!
//! Users, catalog items, and a per-user cart, with the handful of
//! operations that add to, remove from, total and list that cart.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          basket Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    basket-demo (binary)                         │   │
//! │  │    create user ──► create items ──► mutate ──► print totals     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ basket-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │    id     │  │   │
//! │  │   │   User    │  │   Price   │  │   Cart    │  │IdGenerator│  │   │
//! │  │   │   Item    │  │           │  │  totals   │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO PERSISTENCE • NO NETWORK • SINGLE-THREADED                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `User` and `Item`, plus their constructors
//! - [`cart`] - `Cart` and the cart operations
//! - [`money`] - `Price` value type
//! - [`id`] - Pluggable id generation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use basket_core::{add_to_cart, cart_total, create_item, create_user, remove_quantity_from_cart};
//!
//! let mut user = create_user("William T", 26);
//! let citrus = create_item("Grapefruit", 4.0, "A bittersweet citrus");
//!
//! add_to_cart(&citrus, &mut user);
//! add_to_cart(&citrus, &mut user);
//! add_to_cart(&citrus, &mut user);
//! assert_eq!(cart_total(&user), 12.0);
//!
//! remove_quantity_from_cart(&citrus, 2, &mut user);
//! assert_eq!(cart_total(&user), 4.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod id;
pub mod money;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use basket_core::Cart` instead of
// `use basket_core::cart::Cart`

pub use cart::{
    add_to_cart, cart_total, print_cart, remove_from_cart, remove_quantity_from_cart, write_cart,
    Cart, CartSummary,
};
pub use error::{CoreError, CoreResult};
pub use id::{IdGenerator, SequentialIdGenerator, UuidGenerator};
pub use money::Price;
pub use types::{create_item, create_user, Item, User};

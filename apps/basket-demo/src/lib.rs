//! # basket-demo Library
//!
//! The scripted shopping session behind the `basket-demo` binary. Kept in
//! a library so the exact output can be checked in tests.
//!
//! ## Script
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Create user "William T" (26)                                        │
//! │  2. Create items A "1887" (14), B "Lions Mane" (12), C "Grapefruit" (4) │
//! │  3. Add A               → print cart, total 14                          │
//! │  4. Add B three times   → print cart, total 50                          │
//! │  5. Add C three times   → print cart, total 62                          │
//! │  6. Remove all of B     → print cart, total 26                          │
//! │  7. Remove 2 of C       → print cart, total 18                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::Write;

use basket_core::{
    add_to_cart, cart_total, remove_from_cart, remove_quantity_from_cart, write_cart, CoreResult,
    IdGenerator, Item, User,
};
use tracing::info;

/// Runs the demo script, writing every intermediate cart to `out`.
pub fn run<W: Write>(ids: &impl IdGenerator, out: &mut W) -> CoreResult<()> {
    let mut user = User::with_ids(ids, "William T", 26);
    info!(user_id = %user.id(), name = %user.name(), "Created demo user");

    let item_a = Item::with_ids(ids, "1887", 14.0, "A bubbly mineral water");
    let item_b = Item::with_ids(ids, "Lions Mane", 12.0, "A strange yet, tasty white mushroom");
    let item_c = Item::with_ids(ids, "Grapefruit", 4.0, "A bittersweet citrus");

    add_to_cart(&item_a, &mut user);
    report(out, "User Cart after adding Item A:", &user)?;

    for _ in 0..3 {
        add_to_cart(&item_b, &mut user);
    }
    report(out, "User Cart after adding 3 Item B:", &user)?;

    for _ in 0..3 {
        add_to_cart(&item_c, &mut user);
    }
    report(out, "User Cart after adding 3 Item C:", &user)?;

    remove_from_cart(&item_b, &mut user);
    report(out, "User Cart after removing all Item B:", &user)?;

    remove_quantity_from_cart(&item_c, 2, &mut user);
    report(out, "User Cart after removing 2 Item C:", &user)?;

    info!(total = cart_total(&user), "Demo finished");
    Ok(())
}

fn report<W: Write>(out: &mut W, heading: &str, user: &User) -> CoreResult<()> {
    writeln!(out, "{heading}")?;
    write_cart(user, out)?;
    writeln!(out, "Total: {}", user.cart().total())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use basket_core::{SequentialIdGenerator, UuidGenerator};

    const EXPECTED: &str = "\
User Cart after adding Item A:
User Cart:
- 1887 (14$) - Quantity: 1
Total: 14
User Cart after adding 3 Item B:
User Cart:
- 1887 (14$) - Quantity: 1
- Lions Mane (12$) - Quantity: 3
Total: 50
User Cart after adding 3 Item C:
User Cart:
- 1887 (14$) - Quantity: 1
- Lions Mane (12$) - Quantity: 3
- Grapefruit (4$) - Quantity: 3
Total: 62
User Cart after removing all Item B:
User Cart:
- 1887 (14$) - Quantity: 1
- Grapefruit (4$) - Quantity: 3
Total: 26
User Cart after removing 2 Item C:
User Cart:
- 1887 (14$) - Quantity: 1
- Grapefruit (4$) - Quantity: 1
Total: 18
";

    #[test]
    fn test_demo_output() {
        let ids = SequentialIdGenerator::new("demo");
        let mut out = Vec::new();

        run(&ids, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), EXPECTED);
    }

    #[test]
    fn test_demo_output_does_not_depend_on_ids() {
        let mut out = Vec::new();

        run(&UuidGenerator, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), EXPECTED);
    }
}

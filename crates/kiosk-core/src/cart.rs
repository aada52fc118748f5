//! # Cart Store
//!
//! The single source of truth for "what is in this order".
//!
//! ## Line Identity
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  add_item(Classic Burger, 1, None)      ─┐                              │
//! │  add_item(Classic Burger, 1, None)      ─┴─► [101 ×2]          (merged)  │
//! │                                                                         │
//! │  add_item(Classic Burger, 1, Some(..))  ───► [101 ×2] [101* ×1]         │
//! │  add_item(Classic Burger, 1, Some(..))  ───► [101 ×2] [101* ×1] [101*]  │
//! │                                                 customized: never merged │
//! │                                                                         │
//! │  remove_item(101, 1)  → removes the 2nd line with id 101, counted among │
//! │                         lines with id 101 only (not the absolute index) │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Targeting Rules
//! Operations addressed by `(id, index)` resolve their line like this:
//! - exactly one line has `id` → that line, `index` ignored
//! - several lines have `id` → the `index`-th of them, in cart order
//! - nothing resolves → no-op
//!
//! Operations addressed by [`LineId`] are immune to index shifts and report
//! a missing line as [`CoreError::LineNotFound`].
//!
//! ## Change Notification
//! Observers registered with [`CartStore::on_change`] run synchronously
//! before the mutating call returns. They fire only when state changed,
//! except [`CartStore::clear`], which always notifies once.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::trace;
use ts_rs::TS;

use crate::catalog::MenuCatalog;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::pricing::PricingHelper;
use crate::types::{CartLine, Customization, LineId, MenuItem};

// =============================================================================
// Change Notification
// =============================================================================

/// What a mutation did to the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartChange {
    /// A new line was appended.
    Added { line_id: LineId, item_id: u32, quantity: u32 },
    /// A plain add folded into an existing line; `quantity` is the new total.
    Merged { line_id: LineId, item_id: u32, quantity: u32 },
    QuantityChanged { line_id: LineId, item_id: u32, quantity: u32 },
    Removed { line_id: LineId, item_id: u32 },
    /// Customizations were replaced and the line re-priced.
    Customized { line_id: LineId, item_id: u32 },
    Cleared { removed_lines: usize },
}

/// Handle returned by [`CartStore::on_change`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&CartChange) + Send>;

// =============================================================================
// Snapshot
// =============================================================================

/// A copy of the cart and its totals, safe to hand to the front-end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartSnapshot {
    pub lines: Vec<CartLine>,
    pub item_count: u32,
    pub total_cents: i64,
    /// Total as a two-decimal string, e.g. "12.98".
    pub total: String,
}

// =============================================================================
// Cart Store
// =============================================================================

/// In-memory ordered collection of cart lines.
///
/// One instance per kiosk session. The store owns its lines exclusively:
/// every query returns copies.
pub struct CartStore {
    lines: Vec<CartLine>,
    pricing: PricingHelper,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl CartStore {
    /// Creates an empty cart priced against `pricing`.
    pub fn new(pricing: PricingHelper) -> Self {
        CartStore {
            lines: Vec::new(),
            pricing,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Shorthand for `CartStore::new(PricingHelper::new(catalog))`.
    pub fn with_catalog(catalog: Arc<MenuCatalog>) -> Self {
        CartStore::new(PricingHelper::new(catalog))
    }

    pub fn pricing(&self) -> &PricingHelper {
        &self.pricing
    }

    // -------------------------------------------------------------------------
    // Subscriptions
    // -------------------------------------------------------------------------

    /// Registers an observer called after every state change.
    pub fn on_change<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&CartChange) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Drops an observer. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    fn notify(&mut self, change: CartChange) {
        trace!(?change, "cart changed");
        for (_, observer) in self.observers.iter_mut() {
            observer(&change);
        }
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Adds `quantity` units of `item`.
    ///
    /// ## Behavior
    /// - `customizations` is `Some` (even an empty list): always a new line,
    ///   priced at catalog base + surcharge
    /// - otherwise: merges into the first plain line with the same id, or
    ///   appends a new line at the item's price
    ///
    /// A quantity of 0 is treated as 1. Returns the id of the line that now
    /// holds the units.
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use kiosk_core::{CartStore, MenuCatalog};
    ///
    /// let catalog = Arc::new(MenuCatalog::builtin());
    /// let burger = catalog.get(101).unwrap().clone();
    /// let mut cart = CartStore::with_catalog(catalog);
    ///
    /// cart.add_item(&burger, 1, None);
    /// cart.add_item(&burger, 1, None);
    /// assert_eq!(cart.len(), 1);
    /// assert_eq!(cart.formatted_total(), "11.98");
    /// ```
    pub fn add_item(
        &mut self,
        item: &MenuItem,
        quantity: u32,
        customizations: Option<Vec<Customization>>,
    ) -> LineId {
        let quantity = quantity.max(1);

        if let Some(customizations) = customizations {
            let mut line = CartLine::from_menu_item(item, quantity);
            line.base_price_cents = self.pricing.base_price_or(item.id, item.price()).cents();
            line.price_cents = self.pricing.customized_price(item, &customizations).cents();
            line.customizations = Some(customizations);
            return self.push_line(line);
        }

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.id == item.id && l.is_mergeable())
        {
            line.quantity = line.quantity.saturating_add(quantity);
            let change = CartChange::Merged {
                line_id: line.line_id,
                item_id: line.id,
                quantity: line.quantity,
            };
            let line_id = line.line_id;
            self.notify(change);
            return line_id;
        }

        self.push_line(CartLine::from_menu_item(item, quantity))
    }

    /// Appends one unit of `item` as part of the combo anchored on
    /// `main_item_id`.
    ///
    /// A component is a customized add with an empty customization list, so
    /// it never merges. It is priced at the item's own price; pass a
    /// zero-priced item for components included in the combo price.
    pub fn add_combo_component(&mut self, item: &MenuItem, main_item_id: u32) -> LineId {
        let mut line = CartLine::from_menu_item(item, 1);
        line.customizations = Some(Vec::new());
        line.is_combo_item = true;
        line.main_item_id = Some(main_item_id);
        self.push_line(line)
    }

    fn push_line(&mut self, line: CartLine) -> LineId {
        let change = CartChange::Added {
            line_id: line.line_id,
            item_id: line.id,
            quantity: line.quantity,
        };
        let line_id = line.line_id;
        self.lines.push(line);
        self.notify(change);
        line_id
    }

    /// Removes the line targeted by `(id, index)`.
    ///
    /// Returns the removed line, or `None` if nothing resolved.
    pub fn remove_item(&mut self, id: u32, index: usize) -> Option<CartLine> {
        let pos = self.resolve(id, index)?;
        Some(self.remove_at(pos))
    }

    fn remove_at(&mut self, pos: usize) -> CartLine {
        let line = self.lines.remove(pos);
        self.notify(CartChange::Removed {
            line_id: line.line_id,
            item_id: line.id,
        });
        line
    }

    /// Sets the quantity of the line targeted by `(id, index)`.
    ///
    /// `quantity ≤ 0` removes the line exactly like [`remove_item`](Self::remove_item).
    /// Returns whether a line was targeted.
    pub fn update_quantity(&mut self, id: u32, quantity: i64, index: usize) -> bool {
        if quantity <= 0 {
            return self.remove_item(id, index).is_some();
        }

        match self.resolve(id, index) {
            Some(pos) => {
                self.set_quantity_at(pos, clamp_quantity(quantity));
                true
            }
            None => false,
        }
    }

    /// Adds one unit to the line targeted by `(id, index)`.
    pub fn increment(&mut self, id: u32, index: usize) -> bool {
        match self.resolve(id, index) {
            Some(pos) => {
                let quantity = self.lines[pos].quantity as i64 + 1;
                self.update_quantity(id, quantity, index)
            }
            None => false,
        }
    }

    /// Takes one unit off the line targeted by `(id, index)`; a line at 1
    /// is removed.
    pub fn decrement(&mut self, id: u32, index: usize) -> bool {
        match self.resolve(id, index) {
            Some(pos) => {
                let quantity = self.lines[pos].quantity as i64 - 1;
                self.update_quantity(id, quantity, index)
            }
            None => false,
        }
    }

    fn set_quantity_at(&mut self, pos: usize, quantity: u32) {
        let line = &mut self.lines[pos];
        if line.quantity == quantity {
            return;
        }
        line.quantity = quantity;
        let change = CartChange::QuantityChanged {
            line_id: line.line_id,
            item_id: line.id,
            quantity,
        };
        self.notify(change);
    }

    /// Removes the line with this stable id.
    pub fn remove_line(&mut self, line_id: LineId) -> CoreResult<CartLine> {
        let pos = self.position_of(line_id)?;
        Ok(self.remove_at(pos))
    }

    /// Sets the quantity of the line with this stable id; `≤ 0` removes it.
    pub fn set_line_quantity(&mut self, line_id: LineId, quantity: i64) -> CoreResult<()> {
        let pos = self.position_of(line_id)?;
        if quantity <= 0 {
            self.remove_at(pos);
        } else {
            self.set_quantity_at(pos, clamp_quantity(quantity));
        }
        Ok(())
    }

    /// Replaces a line's customizations and re-prices it.
    ///
    /// `None` turns the line back into a plain line at its base price. If a
    /// plain line of the same item already exists, the units fold into that
    /// line and this one is removed. Combo components stay distinct: `None`
    /// on a component stores an empty list.
    ///
    /// Returns the id of the line that now holds the units.
    pub fn customize_line(
        &mut self,
        line_id: LineId,
        customizations: Option<Vec<Customization>>,
    ) -> CoreResult<LineId> {
        let pos = self.position_of(line_id)?;
        let line = &self.lines[pos];
        let customizations = match customizations {
            None if line.is_combo_item => Some(Vec::new()),
            other => other,
        };

        if customizations.is_none() {
            let item_id = line.id;
            let target = self
                .lines
                .iter()
                .find(|l| l.id == item_id && l.line_id != line_id && l.is_mergeable())
                .map(|l| l.line_id);
            if let Some(target) = target {
                return self.fold_into(pos, target);
            }
        }

        let line = &self.lines[pos];
        let base = self.pricing.base_price_or(line.id, line.base_price());
        let surcharge = customizations
            .as_deref()
            .map(PricingHelper::customization_surcharge)
            .unwrap_or_default();

        let line = &mut self.lines[pos];
        line.base_price_cents = base.cents();
        line.price_cents = (base + surcharge).cents();
        line.customizations = customizations;
        let change = CartChange::Customized {
            line_id,
            item_id: line.id,
        };
        self.notify(change);
        Ok(line_id)
    }

    /// Moves the units of the line at `pos` into the plain line `target`.
    fn fold_into(&mut self, pos: usize, target: LineId) -> CoreResult<LineId> {
        let moved = self.remove_at(pos);
        let target_pos = self.position_of(target)?;
        let line = &mut self.lines[target_pos];
        line.quantity = line.quantity.saturating_add(moved.quantity);
        let change = CartChange::Merged {
            line_id: target,
            item_id: line.id,
            quantity: line.quantity,
        };
        self.notify(change);
        Ok(target)
    }

    /// Empties the cart. Always notifies once.
    pub fn clear(&mut self) {
        let removed_lines = self.lines.len();
        self.lines.clear();
        self.notify(CartChange::Cleared { removed_lines });
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Sum of `price × quantity` over all lines.
    pub fn total(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// [`total`](Self::total) as a two-decimal string, e.g. `"12.98"`.
    pub fn formatted_total(&self) -> String {
        self.total().to_decimal_string()
    }

    /// Sum of quantities across all lines.
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |count, line| count.saturating_add(line.quantity))
    }

    /// Copy of every line, in cart order.
    pub fn lines(&self) -> Vec<CartLine> {
        self.lines.clone()
    }

    /// Copy of the line with this stable id.
    pub fn line(&self, line_id: LineId) -> Option<CartLine> {
        self.lines.iter().find(|l| l.line_id == line_id).cloned()
    }

    /// The plain line a non-customized add of `id` would merge into.
    pub fn mergeable_line(&self, id: u32) -> Option<LineId> {
        self.lines
            .iter()
            .find(|l| l.id == id && l.is_mergeable())
            .map(|l| l.line_id)
    }

    /// Copies of the combo component lines anchored on `main_item_id`.
    pub fn combo_components(&self, main_item_id: u32) -> Vec<CartLine> {
        self.lines
            .iter()
            .filter(|l| l.is_combo_item && l.main_item_id == Some(main_item_id))
            .cloned()
            .collect()
    }

    /// Number of lines (not units).
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn snapshot(&self) -> CartSnapshot {
        let total = self.total();
        CartSnapshot {
            lines: self.lines(),
            item_count: self.item_count(),
            total_cents: total.cents(),
            total: total.to_decimal_string(),
        }
    }

    // -------------------------------------------------------------------------
    // Targeting
    // -------------------------------------------------------------------------

    /// Absolute position of the line targeted by `(id, index)`.
    fn resolve(&self, id: u32, index: usize) -> Option<usize> {
        let mut matching = self
            .lines
            .iter()
            .enumerate()
            .filter(|(_, l)| l.id == id)
            .map(|(pos, _)| pos);

        let first = matching.next()?;
        let mut rest = matching.peekable();
        if rest.peek().is_none() {
            return Some(first);
        }

        std::iter::once(first).chain(rest).nth(index)
    }

    fn position_of(&self, line_id: LineId) -> CoreResult<usize> {
        self.lines
            .iter()
            .position(|l| l.line_id == line_id)
            .ok_or_else(|| CoreError::LineNotFound(line_id.to_string()))
    }
}

fn clamp_quantity(quantity: i64) -> u32 {
    u32::try_from(quantity).unwrap_or(u32::MAX)
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("lines", &self.lines)
            .field("observers", &self.observers.len())
            .finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use crate::types::Selection;

    fn catalog() -> Arc<MenuCatalog> {
        Arc::new(MenuCatalog::builtin())
    }

    fn cart() -> CartStore {
        CartStore::with_catalog(catalog())
    }

    fn menu(id: u32) -> MenuItem {
        MenuCatalog::builtin().get(id).unwrap().clone()
    }

    fn toppings(names: &[(&str, i64)]) -> Vec<Customization> {
        vec![Customization::new(
            "Toppings",
            names.iter().map(|&(n, c)| Selection::new(n, c)).collect(),
        )]
    }

    fn recorder(cart: &mut CartStore) -> Arc<Mutex<Vec<CartChange>>> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        cart.on_change(move |change| sink.lock().unwrap().push(change.clone()));
        seen
    }

    #[test]
    fn test_plain_adds_merge() {
        let mut cart = cart();
        let burger = menu(101);

        cart.add_item(&burger, 1, None);
        cart.add_item(&burger, 1, None);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.formatted_total(), "11.98");
    }

    #[test]
    fn test_plain_adds_sum_requested_quantities() {
        let mut cart = cart();
        let fries = menu(301);

        for qty in [1, 3, 2, 5] {
            cart.add_item(&fries, qty, None);
        }

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.item_count(), 11);
    }

    #[test]
    fn test_customized_add_is_new_line_with_surcharge() {
        let mut cart = cart();
        let burger = menu(101);

        cart.add_item(&burger, 1, None);
        cart.add_item(&burger, 1, Some(toppings(&[("Bacon", 50), ("Cheese", 50)])));

        let lines = cart.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].price_cents, 699);
        assert_eq!(lines[1].base_price_cents, 599);
        assert_eq!(cart.formatted_total(), "12.98");
    }

    #[test]
    fn test_customized_adds_never_merge() {
        let mut cart = cart();
        let burger = menu(101);
        let same = toppings(&[("Bacon", 100)]);

        for expected in 1..=3 {
            cart.add_item(&burger, 1, Some(same.clone()));
            assert_eq!(cart.len(), expected);
        }

        // an empty customization list still marks a customized add
        cart.add_item(&burger, 1, Some(Vec::new()));
        assert_eq!(cart.len(), 4);

        // and a plain add does not fold into any of them
        cart.add_item(&burger, 1, None);
        assert_eq!(cart.len(), 5);
    }

    #[test]
    fn test_plain_add_skips_customized_line_with_same_id() {
        let mut cart = cart();
        let burger = menu(101);

        cart.add_item(&burger, 1, Some(toppings(&[("Bacon", 100)])));
        assert!(cart.mergeable_line(101).is_none());
        let plain = cart.add_item(&burger, 2, None);
        cart.add_item(&burger, 1, None);
        assert_eq!(cart.mergeable_line(101), Some(plain));

        let lines = cart.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].quantity, 1);
        assert_eq!(lines[1].quantity, 3);
    }

    #[test]
    fn test_zero_quantity_add_counts_as_one() {
        let mut cart = cart();
        cart.add_item(&menu(401), 0, None);
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_remove_uses_index_among_same_id_lines() {
        let mut cart = cart();
        let chicken = menu(201);
        let fries = menu(301);

        cart.add_item(&fries, 1, None);
        let first = cart.add_item(&chicken, 1, Some(toppings(&[("Pickles", 0)])));
        let second = cart.add_item(&chicken, 1, Some(toppings(&[("Bacon", 100)])));

        // absolute index 1 would be the first chicken line; id-relative 1 is the second
        let removed = cart.remove_item(201, 1).unwrap();
        assert_eq!(removed.line_id, second);

        let lines = cart.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].line_id, first);
        assert_eq!(lines[1].quantity, 1);
    }

    #[test]
    fn test_single_match_ignores_index() {
        let mut cart = cart();
        cart.add_item(&menu(301), 2, None);

        assert!(cart.remove_item(301, 7).is_some());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_out_of_range_and_unknown_are_noops() {
        let mut cart = cart();
        let chicken = menu(201);
        cart.add_item(&chicken, 1, Some(toppings(&[("A", 0)])));
        cart.add_item(&chicken, 2, Some(toppings(&[("B", 0)])));
        let before = cart.lines();
        let seen = recorder(&mut cart);

        assert!(cart.remove_item(201, 2).is_none());
        assert!(cart.remove_item(999, 0).is_none());
        assert!(!cart.update_quantity(201, 5, 9));
        assert!(!cart.update_quantity(999, 5, 0));
        assert!(!cart.update_quantity(201, 0, 4));

        assert_eq!(cart.lines(), before);
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_update_quantity_sets_value() {
        let mut cart = cart();
        cart.add_item(&menu(402), 1, None);

        assert!(cart.update_quantity(402, 4, 0));
        assert_eq!(cart.item_count(), 4);
        assert_eq!(cart.formatted_total(), "15.96");
    }

    #[test]
    fn test_update_quantity_targets_index_when_ambiguous() {
        let mut cart = cart();
        let burger = menu(102);
        cart.add_item(&burger, 1, Some(toppings(&[("A", 0)])));
        cart.add_item(&burger, 1, Some(toppings(&[("B", 0)])));

        cart.update_quantity(102, 3, 1);

        let lines = cart.lines();
        assert_eq!(lines[0].quantity, 1);
        assert_eq!(lines[1].quantity, 3);
    }

    #[test]
    fn test_non_positive_update_equals_remove() {
        let build = || {
            let mut cart = cart();
            let chicken = menu(201);
            cart.add_item(&chicken, 1, Some(toppings(&[("A", 0)])));
            cart.add_item(&chicken, 1, Some(toppings(&[("B", 0)])));
            cart.add_item(&chicken, 1, Some(toppings(&[("C", 0)])));
            cart
        };

        for quantity in [0, -1, -50] {
            let mut via_update = build();
            let mut via_remove = build();
            let ids: Vec<_> = via_update.lines().iter().map(|l| l.line_id).collect();
            // same ids in both for comparison
            via_remove.lines = via_update.lines.clone();

            via_update.update_quantity(201, quantity, 1);
            via_remove.remove_item(201, 1);

            assert_eq!(via_update.lines(), via_remove.lines());
            assert_eq!(via_update.len(), 2);
            assert!(via_update.line(ids[1]).is_none());
        }
    }

    #[test]
    fn test_increment_and_decrement() {
        let mut cart = cart();
        cart.add_item(&menu(503), 1, None);

        assert!(cart.increment(503, 0));
        assert_eq!(cart.item_count(), 2);

        assert!(cart.decrement(503, 0));
        assert!(cart.decrement(503, 0));
        assert!(cart.is_empty());
        assert!(!cart.decrement(503, 0));
    }

    #[test]
    fn test_line_id_operations() {
        let mut cart = cart();
        let burger = menu(101);
        let first = cart.add_item(&burger, 1, Some(toppings(&[("A", 0)])));
        let second = cart.add_item(&burger, 1, Some(toppings(&[("B", 0)])));

        cart.set_line_quantity(second, 5).unwrap();
        assert_eq!(cart.line(second).unwrap().quantity, 5);

        cart.remove_line(first).unwrap();
        assert_eq!(cart.len(), 1);
        assert!(matches!(
            cart.remove_line(first),
            Err(CoreError::LineNotFound(_))
        ));

        cart.set_line_quantity(second, 0).unwrap();
        assert!(cart.is_empty());
        assert!(cart.set_line_quantity(second, 1).is_err());
    }

    #[test]
    fn test_customize_line_reprices() {
        let mut cart = cart();
        let burger = menu(104);
        let line_id = cart.add_item(&burger, 2, None);

        cart.customize_line(line_id, Some(toppings(&[("Extra Bacon", 150)])))
            .unwrap();
        let line = cart.line(line_id).unwrap();
        assert_eq!(line.price_cents, 999);
        assert!(!line.is_mergeable());

        // re-customizing starts from base, not from the surcharged price
        cart.customize_line(line_id, Some(toppings(&[("Onions", 25)])))
            .unwrap();
        assert_eq!(cart.line(line_id).unwrap().price_cents, 874);

        cart.customize_line(line_id, None).unwrap();
        let line = cart.line(line_id).unwrap();
        assert_eq!(line.price_cents, 849);
        assert!(line.customizations.is_none());
        assert_eq!(cart.formatted_total(), "16.98");
    }

    #[test]
    fn test_combo_components() {
        let mut cart = cart();
        let burger = menu(101);
        let mut fries = menu(301);
        fries.price_cents = 0;

        cart.add_item(&burger, 1, None);
        cart.add_combo_component(&fries, 101);
        cart.add_combo_component(&fries, 101);
        cart.add_item(&menu(301), 1, None);

        assert_eq!(cart.len(), 4);
        let components = cart.combo_components(101);
        assert_eq!(components.len(), 2);
        assert!(components
            .iter()
            .all(|l| l.is_combo_item && l.main_item_id == Some(101)));
        // the plain fries did not merge into a component
        assert_eq!(cart.lines()[3].quantity, 1);
        assert_eq!(cart.formatted_total(), "8.98");
    }

    #[test]
    fn test_combo_component_then_plain_add_keeps_one_plain_line() {
        let mut cart = cart();
        let fries = menu(301);

        let component = cart.add_combo_component(&fries, 101);
        cart.add_item(&fries, 1, None);
        cart.add_item(&fries, 2, None);

        let plain: Vec<_> = cart
            .lines()
            .into_iter()
            .filter(|l| l.id == 301 && l.customizations.is_none())
            .collect();
        assert_eq!(plain.len(), 1);
        assert_eq!(plain[0].quantity, 3);

        let component = cart.line(component).unwrap();
        assert_eq!(component.customizations, Some(vec![]));
        assert_eq!(component.quantity, 1);

        // clearing a component's customizations keeps it a component
        cart.customize_line(component.line_id, None).unwrap();
        assert_eq!(cart.len(), 2);
        assert!(!cart.line(component.line_id).unwrap().is_mergeable());
    }

    #[test]
    fn test_uncustomizing_folds_into_existing_plain_line() {
        let mut cart = cart();
        let burger = menu(101);

        let plain = cart.add_item(&burger, 1, None);
        let custom = cart.add_item(&burger, 2, Some(toppings(&[("Bacon", 100)])));
        let seen = recorder(&mut cart);

        let holder = cart.customize_line(custom, None).unwrap();
        assert_eq!(holder, plain);
        assert_eq!(cart.len(), 1);
        assert!(cart.line(custom).is_none());
        assert_eq!(cart.line(plain).unwrap().quantity, 3);

        cart.add_item(&burger, 1, None);
        let quantities: Vec<u32> = cart
            .lines()
            .iter()
            .filter(|l| l.id == 101 && l.customizations.is_none())
            .map(|l| l.quantity)
            .collect();
        assert_eq!(quantities, vec![4]);
        assert_eq!(cart.formatted_total(), "23.96");

        let seen = seen.lock().unwrap();
        assert_eq!(
            seen[0],
            CartChange::Removed {
                line_id: custom,
                item_id: 101
            }
        );
        assert_eq!(
            seen[1],
            CartChange::Merged {
                line_id: plain,
                item_id: 101,
                quantity: 3
            }
        );
    }

    #[test]
    fn test_total_is_idempotent() {
        let mut cart = cart();
        cart.add_item(&menu(603), 1, None);
        cart.add_item(&menu(404), 3, None);

        let first = cart.formatted_total();
        assert_eq!(first, cart.formatted_total());
        assert_eq!(first, "29.46");
    }

    #[test]
    fn test_clear() {
        let mut cart = cart();
        cart.add_item(&menu(101), 2, None);
        cart.add_item(&menu(201), 1, Some(toppings(&[("A", 100)])));

        cart.clear();

        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.formatted_total(), "0.00");
        assert!(cart.is_empty());
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let mut cart = cart();
        cart.add_item(&menu(101), 1, None);

        let mut snapshot = cart.snapshot();
        snapshot.lines[0].quantity = 40;
        snapshot.lines.clear();

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.snapshot().total, "5.99");
        assert_eq!(cart.snapshot().total_cents, 599);
    }

    #[test]
    fn test_observers_see_each_change() {
        let mut cart = cart();
        let seen = recorder(&mut cart);
        let burger = menu(101);

        let line_id = cart.add_item(&burger, 1, None);
        cart.add_item(&burger, 1, None);
        cart.update_quantity(101, 5, 0);
        cart.update_quantity(101, 5, 0);
        cart.remove_item(101, 0);
        cart.clear();

        let seen = seen.lock().unwrap();
        assert_eq!(
            *seen,
            vec![
                CartChange::Added { line_id, item_id: 101, quantity: 1 },
                CartChange::Merged { line_id, item_id: 101, quantity: 2 },
                CartChange::QuantityChanged { line_id, item_id: 101, quantity: 5 },
                CartChange::Removed { line_id, item_id: 101 },
                CartChange::Cleared { removed_lines: 0 },
            ]
        );
    }

    #[test]
    fn test_unsubscribe() {
        let mut cart = cart();
        let count = Arc::new(Mutex::new(0));
        let sink = Arc::clone(&count);
        let sub = cart.on_change(move |_| *sink.lock().unwrap() += 1);

        cart.add_item(&menu(101), 1, None);
        assert!(cart.unsubscribe(sub));
        assert!(!cart.unsubscribe(sub));
        cart.add_item(&menu(101), 1, None);

        assert_eq!(*count.lock().unwrap(), 1);
    }
}

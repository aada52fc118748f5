//! # Display Formatting
//!
//! Text rendering of customizations for cart rows and order tickets.
//!
//! ```text
//! [Toppings: Bacon, Cheese] [Sauce: BBQ (Extra)] [Cheese: -]
//!            │                      │                 │
//!            ▼                      ▼                 ▼
//! "Toppings: Bacon, Cheese • Sauce: BBQ (Extra)"    (dropped)
//! ```

use crate::types::{CartLine, Customization, Selection};

/// Category whose selections show their intensity label.
pub const SAUCE_CATEGORY: &str = "Sauce";

/// Separator between rendered categories.
pub const CATEGORY_SEPARATOR: &str = " • ";

/// Renders customizations as one display line.
///
/// Categories with no selections are dropped; the rest keep input order.
///
/// ```rust
/// use kiosk_core::format::format_customizations;
/// use kiosk_core::{Customization, SauceIntensity, Selection};
///
/// let sauce = vec![Customization::new("Sauce", vec![
///     Selection::with_intensity("BBQ", 0, SauceIntensity::Extra),
/// ])];
/// assert_eq!(format_customizations(&sauce), "Sauce: BBQ (Extra)");
/// assert_eq!(format_customizations(&[]), "");
/// ```
pub fn format_customizations(customizations: &[Customization]) -> String {
    customizations
        .iter()
        .filter(|c| !c.selections.is_empty())
        .map(format_category)
        .collect::<Vec<_>>()
        .join(CATEGORY_SEPARATOR)
}

fn format_category(customization: &Customization) -> String {
    let is_sauce = customization.category == SAUCE_CATEGORY;
    let names = customization
        .selections
        .iter()
        .map(|s| format_selection(s, is_sauce))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{}: {}", customization.category, names)
}

fn format_selection(selection: &Selection, is_sauce: bool) -> String {
    match (&selection.intensity_label, is_sauce) {
        (Some(label), true) => format!("{} ({})", selection.name, label),
        _ => selection.name.clone(),
    }
}

impl CartLine {
    /// Customization text for this line; empty for plain lines.
    pub fn customization_summary(&self) -> String {
        self.customizations
            .as_deref()
            .map(format_customizations)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SauceIntensity;

    #[test]
    fn test_sauce_with_intensity() {
        let custom = vec![Customization::new(
            "Sauce",
            vec![Selection::with_intensity("BBQ", 0, SauceIntensity::Extra)],
        )];
        assert_eq!(format_customizations(&custom), "Sauce: BBQ (Extra)");
    }

    #[test]
    fn test_sauce_without_intensity_is_plain() {
        let custom = vec![Customization::new(
            "Sauce",
            vec![
                Selection::new("Ketchup", 0),
                Selection::with_intensity("Ranch", 25, SauceIntensity::Light),
            ],
        )];
        assert_eq!(format_customizations(&custom), "Sauce: Ketchup, Ranch (Light)");
    }

    #[test]
    fn test_intensity_ignored_outside_sauce() {
        let custom = vec![Customization::new(
            "Toppings",
            vec![Selection::with_intensity("Onions", 0, SauceIntensity::Extra)],
        )];
        assert_eq!(format_customizations(&custom), "Toppings: Onions");
    }

    #[test]
    fn test_empty_categories_dropped_and_order_kept() {
        let custom = vec![
            Customization::new(
                "Toppings",
                vec![Selection::new("Bacon", 100), Selection::new("Lettuce", 0)],
            ),
            Customization::new("Cheese", vec![]),
            Customization::new("Side", vec![Selection::new("Onion Rings", 100)]),
        ];
        assert_eq!(
            format_customizations(&custom),
            "Toppings: Bacon, Lettuce • Side: Onion Rings"
        );
    }

    #[test]
    fn test_only_empty_categories() {
        let custom = vec![Customization::new("Cheese", vec![])];
        assert_eq!(format_customizations(&custom), "");
    }
}

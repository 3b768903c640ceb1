use serde::{Deserialize, Serialize};
use std::fmt;

/// Round a currency amount to whole cents.
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientAmount {
    pub name: String,
    pub per_cake: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub price: f64,
    pub ingredients: Vec<IngredientAmount>,
}

impl Recipe {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
            ingredients: Vec::new(),
        }
    }

    pub fn with_ingredient(mut self, name: impl Into<String>, per_cake: u64) -> Self {
        self.set_ingredient(name, per_cake);
        self
    }

    /// Later definitions of the same ingredient overwrite the quantity in place.
    pub fn set_ingredient(&mut self, name: impl Into<String>, per_cake: u64) {
        let name = name.into();
        match self.ingredients.iter_mut().find(|i| i.name == name) {
            Some(existing) => existing.per_cake = per_cake,
            None => self.ingredients.push(IngredientAmount { name, per_cake }),
        }
    }

    pub fn quantity_of(&self, ingredient: &str) -> Option<u64> {
        self.ingredients
            .iter()
            .find(|i| i.name == ingredient)
            .map(|i| i.per_cake)
    }

    /// Derive the requested variant of this recipe. `Variant::Base` returns a copy.
    pub fn variant(&self, kind: Variant) -> Recipe {
        match kind {
            Variant::Base => self.clone(),
            Variant::Mini | Variant::Premium => Recipe {
                name: format!("{} ({})", self.name, kind),
                price: kind.scale_price(self.price),
                ingredients: self
                    .ingredients
                    .iter()
                    .map(|i| IngredientAmount {
                        name: i.name.clone(),
                        per_cake: kind.scale_quantity(i.per_cake),
                    })
                    .collect(),
            },
        }
    }
}

/// Size variants a cake can be ordered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    Base,
    Mini,
    Premium,
}

impl Variant {
    const SUFFIXES: [(Variant, &'static str); 2] =
        [(Variant::Mini, "(mini)"), (Variant::Premium, "(premium)")];

    /// Split a cake-type label into its variant and the base name.
    ///
    /// The suffix match is case-insensitive and the returned base name is trimmed.
    /// Labels without a recognised suffix are `Variant::Base`.
    pub fn split_label(label: &str) -> (Variant, &str) {
        let label = label.trim();
        for (kind, suffix) in Self::SUFFIXES {
            if label.len() < suffix.len() {
                continue;
            }
            let cut = label.len() - suffix.len();
            if label.is_char_boundary(cut) && label[cut..].eq_ignore_ascii_case(suffix) {
                return (kind, label[..cut].trim());
            }
        }
        (Variant::Base, label)
    }

    pub fn scale_quantity(self, per_cake: u64) -> u64 {
        match self {
            Variant::Base => per_cake,
            Variant::Mini => (per_cake / 2).max(1),
            // floor(q * 1.5), exact for integers
            Variant::Premium => per_cake.saturating_mul(3) / 2,
        }
    }

    pub fn scale_price(self, price: f64) -> f64 {
        match self {
            Variant::Base => price,
            Variant::Mini => round_cents(price * 0.6),
            Variant::Premium => round_cents(price * 1.4),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Base => write!(f, "Base"),
            Variant::Mini => write!(f, "Mini"),
            Variant::Premium => write!(f, "Premium"),
        }
    }
}

/// Stock level and unit cost for one ingredient. Never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InventoryEntry {
    quantity: u64,
    unit_cost: f64,
}

impl InventoryEntry {
    pub fn new(quantity: u64, unit_cost: f64) -> Self {
        Self {
            quantity,
            unit_cost,
        }
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub fn unit_cost(&self) -> f64 {
        self.unit_cost
    }

    /// Entry left after withdrawing `amount`, or `None` if not enough is on hand.
    pub fn withdraw(&self, amount: u64) -> Option<InventoryEntry> {
        self.quantity
            .checked_sub(amount)
            .map(|quantity| InventoryEntry::new(quantity, self.unit_cost))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub customer: String,
    pub cake_type: String,
    pub quantity: u64,
}

impl Order {
    pub fn new(customer: impl Into<String>, cake_type: impl Into<String>, quantity: u64) -> Self {
        Self {
            customer: customer.into(),
            cake_type: cake_type.into(),
            quantity,
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ordered {} x {}",
            self.customer, self.quantity, self.cake_type
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chocolate() -> Recipe {
        Recipe::new("Chocolate", 20.0)
            .with_ingredient("Flour", 3)
            .with_ingredient("Sugar", 1)
            .with_ingredient("Cocoa", 0)
    }

    #[test]
    fn test_mini_variant_halves_with_minimum_one() {
        let mini = chocolate().variant(Variant::Mini);

        assert_eq!(mini.name, "Chocolate (Mini)");
        assert_eq!(mini.quantity_of("Flour"), Some(1));
        assert_eq!(mini.quantity_of("Sugar"), Some(1));
        // zero still becomes one for minis
        assert_eq!(mini.quantity_of("Cocoa"), Some(1));
        assert_eq!(mini.price, round_cents(20.0 * 0.6));
    }

    #[test]
    fn test_premium_variant_truncates() {
        let premium = chocolate().variant(Variant::Premium);

        assert_eq!(premium.name, "Chocolate (Premium)");
        assert_eq!(premium.quantity_of("Flour"), Some(4));
        assert_eq!(premium.quantity_of("Sugar"), Some(1));
        assert_eq!(premium.quantity_of("Cocoa"), Some(0));
        assert_eq!(premium.price, 28.0);
    }

    #[test]
    fn test_variant_scaling_matches_reference_arithmetic() {
        for q in 0..200u64 {
            assert_eq!(Variant::Mini.scale_quantity(q), std::cmp::max(1, q / 2));
            assert_eq!(
                Variant::Premium.scale_quantity(q),
                (q as f64 * 1.5).floor() as u64
            );
        }
        for cents in [0u32, 1, 99, 1250, 1999, 4321] {
            let price = cents as f64 / 100.0;
            assert_eq!(Variant::Mini.scale_price(price), round_cents(price * 0.6));
            assert_eq!(Variant::Premium.scale_price(price), round_cents(price * 1.4));
        }
    }

    #[test]
    fn test_variant_derivation_is_deterministic() {
        let base = chocolate();
        assert_eq!(base.variant(Variant::Mini), base.variant(Variant::Mini));
        assert_eq!(base.variant(Variant::Base), base);
    }

    #[test]
    fn test_split_label() {
        assert_eq!(Variant::split_label("Lemon (Mini)"), (Variant::Mini, "Lemon"));
        assert_eq!(
            Variant::split_label("  lemon (PREMIUM)  "),
            (Variant::Premium, "lemon")
        );
        assert_eq!(Variant::split_label("Lemon(mini)"), (Variant::Mini, "Lemon"));
        assert_eq!(Variant::split_label(" Lemon "), (Variant::Base, "Lemon"));
        assert_eq!(Variant::split_label("Mini"), (Variant::Base, "Mini"));
        assert_eq!(Variant::split_label("Crème (mini)"), (Variant::Mini, "Crème"));
    }

    #[test]
    fn test_set_ingredient_overwrites_in_place() {
        let recipe = Recipe::new("Pound", 12.0)
            .with_ingredient("Butter", 2)
            .with_ingredient("Eggs", 4)
            .with_ingredient("Butter", 3);

        assert_eq!(recipe.ingredients.len(), 2);
        assert_eq!(recipe.ingredients[0].name, "Butter");
        assert_eq!(recipe.ingredients[0].per_cake, 3);
    }

    #[test]
    fn test_inventory_entry_withdraw() {
        let entry = InventoryEntry::new(10, 0.5);
        assert_eq!(entry.withdraw(4), Some(InventoryEntry::new(6, 0.5)));
        assert_eq!(entry.withdraw(10).map(|e| e.quantity()), Some(0));
        assert_eq!(entry.withdraw(11), None);
    }
}

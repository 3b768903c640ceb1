use crate::domain::model::{IngredientAmount, InventoryEntry};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StockError {
    #[error("missing ingredient: {ingredient}")]
    MissingIngredient { ingredient: String },

    #[error("not enough {ingredient}: needed {needed}, available {available}")]
    Insufficient {
        ingredient: String,
        needed: u64,
        available: u64,
    },

    #[error("requirement for {ingredient} overflows ({per_cake} x {quantity})")]
    Overflow {
        ingredient: String,
        per_cake: u64,
        quantity: u64,
    },
}

/// Ingredient stock keyed by exact ingredient name, kept in first-insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryLedger {
    entries: Vec<(String, InventoryEntry)>,
    index: HashMap<String, usize>,
}

impl InventoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the stock for an ingredient, replacing any earlier entry in place.
    pub fn insert(&mut self, name: impl Into<String>, entry: InventoryEntry) {
        let name = name.into();
        match self.index.get(&name) {
            Some(&slot) => self.entries[slot].1 = entry,
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, entry));
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&InventoryEntry> {
        self.index.get(name).map(|&slot| &self.entries[slot].1)
    }

    /// On-hand quantity; missing ingredients count as zero.
    pub fn available(&self, name: &str) -> u64 {
        self.get(name).map(InventoryEntry::quantity).unwrap_or(0)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &InventoryEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn can_fulfill(&self, ingredients: &[IngredientAmount], quantity: u64) -> bool {
        self.plan_withdrawals(ingredients, quantity).is_ok()
    }

    /// Withdraw the ingredients for `quantity` cakes and return their cost.
    ///
    /// Every ingredient is validated before anything is withdrawn, so on error the
    /// ledger is left exactly as it was.
    pub fn deduct(
        &mut self,
        ingredients: &[IngredientAmount],
        quantity: u64,
    ) -> Result<f64, StockError> {
        let plan = self.plan_withdrawals(ingredients, quantity).inspect_err(|e| {
            tracing::debug!("Deduction for {} cake(s) refused: {}", quantity, e);
        })?;

        let mut cost = 0.0;
        for (slot, remaining) in plan {
            let (_, entry) = &mut self.entries[slot];
            cost += (entry.quantity() - remaining.quantity()) as f64 * entry.unit_cost();
            *entry = remaining;
        }

        tracing::debug!(
            "Deducted ingredients for {} cake(s): cost = ${:.2}",
            quantity,
            cost
        );
        Ok(cost)
    }

    /// Validate a withdrawal without touching the ledger, returning the entry each
    /// affected slot would be left with.
    fn plan_withdrawals(
        &self,
        ingredients: &[IngredientAmount],
        quantity: u64,
    ) -> Result<Vec<(usize, InventoryEntry)>, StockError> {
        let mut plan: Vec<(usize, InventoryEntry)> = Vec::with_capacity(ingredients.len());
        for ingredient in ingredients {
            let needed = ingredient.per_cake.checked_mul(quantity).ok_or_else(|| {
                StockError::Overflow {
                    ingredient: ingredient.name.clone(),
                    per_cake: ingredient.per_cake,
                    quantity,
                }
            })?;

            let slot = *self.index.get(&ingredient.name).ok_or_else(|| {
                StockError::MissingIngredient {
                    ingredient: ingredient.name.clone(),
                }
            })?;

            // the same ingredient listed twice draws from what is already planned
            let planned = plan.iter().position(|(s, _)| *s == slot);
            let current = match planned {
                Some(pos) => plan[pos].1,
                None => self.entries[slot].1,
            };
            let remaining = current
                .withdraw(needed)
                .ok_or_else(|| StockError::Insufficient {
                    ingredient: ingredient.name.clone(),
                    needed,
                    available: current.quantity(),
                })?;

            match planned {
                Some(pos) => plan[pos].1 = remaining,
                None => plan.push((slot, remaining)),
            }
        }
        Ok(plan)
    }
}

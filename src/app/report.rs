use crate::core::batch::BatchOutcome;
use crate::core::catalog::RecipeCatalog;
use crate::core::engine::FulfillmentReport;
use crate::core::ledger::InventoryLedger;
use crate::domain::model::{Order, Recipe};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Write};

const RULE: &str = "----------------------------------------";

/// Reports available without the interactive menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    All,
    Inventory,
    Fulfilled,
    Missed,
    Sales,
    Recipes,
}

/// Capitalise the first letter of every word and lowercase the rest.
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if at_word_start {
            result.extend(c.to_uppercase());
        } else {
            result.extend(c.to_lowercase());
        }
        at_word_start = !(c.is_alphanumeric() || c == '\'');
    }
    result
}

/// Printable recipe card for a single cake.
pub struct RecipeCard<'a>(pub &'a Recipe);

impl fmt::Display for RecipeCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let recipe = self.0;
        writeln!(f, "{}", RULE)?;
        writeln!(f, "🍰 {} Recipe Card", title_case(&recipe.name))?;
        writeln!(f, "{}", RULE)?;
        writeln!(f, "Price: ${:.2}", recipe.price)?;
        writeln!(f, "Ingredients:")?;
        for ingredient in &recipe.ingredients {
            writeln!(f, "  - {}: {}", title_case(&ingredient.name), ingredient.per_cake)?;
        }
        write!(f, "{}", RULE)
    }
}

pub fn write_inventory_report<W: Write>(out: &mut W, ledger: &InventoryLedger) -> io::Result<()> {
    writeln!(out, "\n--- Inventory Report ---")?;
    for (name, entry) in ledger.entries() {
        writeln!(
            out,
            "{:<25} {} units @ ${:.2}/unit",
            name,
            entry.quantity(),
            entry.unit_cost()
        )?;
    }
    Ok(())
}

fn write_order_line<W: Write>(out: &mut W, order: &Order) -> io::Result<()> {
    writeln!(
        out,
        "{:<20} - {} x{}",
        order.customer, order.cake_type, order.quantity
    )
}

pub fn write_fulfilled_report<W: Write>(out: &mut W, report: &FulfillmentReport) -> io::Result<()> {
    writeln!(out, "\n--- Fulfilled Orders ---")?;
    if report.fulfilled.is_empty() {
        writeln!(out, "No orders were fulfilled.")?;
    }
    for fulfilled in &report.fulfilled {
        write_order_line(out, &fulfilled.order)?;
    }
    Ok(())
}

pub fn write_missed_report<W: Write>(out: &mut W, report: &FulfillmentReport) -> io::Result<()> {
    writeln!(out, "\n--- Missed Orders ---")?;
    if report.missed.is_empty() {
        writeln!(out, "All orders were fulfilled!")?;
    }
    for missed in &report.missed {
        write_order_line(out, &missed.order)?;
    }
    Ok(())
}

pub fn write_sales_summary<W: Write>(out: &mut W, report: &FulfillmentReport) -> io::Result<()> {
    writeln!(out, "\n--- Sales Summary ---")?;
    writeln!(out, "Total Revenue: ${:.2}", report.total_revenue)?;
    writeln!(out, "Total Cost:    ${:.2}", report.total_cost)?;
    writeln!(out, "Net Profit:    ${:.2}", report.net_profit())
}

pub fn write_recipe_list<W: Write>(out: &mut W, catalog: &RecipeCatalog) -> io::Result<()> {
    writeln!(out, "\n--- Recipe List ---")?;
    for (i, recipe) in catalog.recipes().iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, recipe.name)?;
    }
    Ok(())
}

pub fn write_report<W: Write>(out: &mut W, kind: ReportKind, outcome: &BatchOutcome) -> io::Result<()> {
    match kind {
        ReportKind::Inventory => write_inventory_report(out, &outcome.ledger),
        ReportKind::Fulfilled => write_fulfilled_report(out, &outcome.report),
        ReportKind::Missed => write_missed_report(out, &outcome.report),
        ReportKind::Sales => write_sales_summary(out, &outcome.report),
        ReportKind::Recipes => {
            write_recipe_list(out, &outcome.catalog)?;
            for recipe in outcome.catalog.recipes() {
                writeln!(out, "\n{}", RecipeCard(recipe))?;
            }
            Ok(())
        }
        ReportKind::All => {
            for kind in [
                ReportKind::Inventory,
                ReportKind::Fulfilled,
                ReportKind::Missed,
                ReportKind::Sales,
            ] {
                write_report(out, kind, outcome)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::{FulfilledOrder, MissReason, MissedOrder};
    use crate::domain::model::InventoryEntry;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("devil's food"), "Devil's Food");
        assert_eq!(title_case("LEMON (mini)"), "Lemon (Mini)");
        assert_eq!(title_case("cocoa powder"), "Cocoa Powder");
    }

    #[test]
    fn test_inventory_report() {
        let mut ledger = InventoryLedger::new();
        ledger.insert("Flour", InventoryEntry::new(4, 0.5));

        let text = render(|out| write_inventory_report(out, &ledger));
        assert_eq!(
            text,
            "\n--- Inventory Report ---\nFlour                     4 units @ $0.50/unit\n"
        );
    }

    #[test]
    fn test_order_reports() {
        let report = FulfillmentReport {
            fulfilled: vec![FulfilledOrder {
                order: Order::new("Ada", "Lemon", 2),
                recipe: Recipe::new("Lemon", 15.0),
                cost: 3.0,
                revenue: 30.0,
            }],
            missed: vec![],
            total_revenue: 30.0,
            total_cost: 3.0,
        };

        let text = render(|out| write_fulfilled_report(out, &report));
        assert!(text.contains(&format!("{:<20} - Lemon x2", "Ada")));

        let text = render(|out| write_missed_report(out, &report));
        assert!(text.contains("All orders were fulfilled!"));

        let text = render(|out| write_sales_summary(out, &report));
        assert!(text.contains("Total Revenue: $30.00"));
        assert!(text.contains("Total Cost:    $3.00"));
        assert!(text.contains("Net Profit:    $27.00"));
    }

    #[test]
    fn test_empty_fulfilled_report() {
        let report = FulfillmentReport {
            missed: vec![MissedOrder {
                order: Order::new("Grace", "Vanilla", 1),
                reason: MissReason::UnknownCake,
            }],
            ..Default::default()
        };

        let text = render(|out| write_fulfilled_report(out, &report));
        assert!(text.contains("No orders were fulfilled."));

        let text = render(|out| write_missed_report(out, &report));
        assert!(text.contains("Grace"));
        assert!(text.contains("Vanilla x1"));
    }

    #[test]
    fn test_recipe_card() {
        let recipe = Recipe::new("devil's food", 24.5)
            .with_ingredient("cocoa powder", 3)
            .with_ingredient("flour", 2);

        let card = RecipeCard(&recipe).to_string();

        assert!(card.contains("🍰 Devil's Food Recipe Card"));
        assert!(card.contains("Price: $24.50"));
        assert!(card.contains("  - Cocoa Powder: 3\n  - Flour: 2\n"));
        assert!(card.starts_with(RULE));
        assert!(card.ends_with(RULE));
    }
}

use crate::adapters::{flat_file_reader, is_blank, is_comment, line_of};
use crate::core::catalog::RecipeCatalog;
use crate::domain::model::Recipe;
use crate::utils::error::Result;

/// Parse `Name,Price,Ingredient1,Qty1,Ingredient2,Qty2,...` lines into a catalog.
///
/// Blank and `#` lines are ignored. A line with fewer than three fields, an empty
/// name or an unusable price is skipped; a bad ingredient pair is dropped on its own
/// and the rest of the line is kept. Data that is not valid UTF-8 fails the whole load.
pub fn parse_recipes(data: &[u8]) -> Result<RecipeCatalog> {
    let mut catalog = RecipeCatalog::new();
    let mut skipped = 0usize;

    for result in flat_file_reader(data).records() {
        let record = result?;
        if is_blank(&record) || is_comment(&record) {
            continue;
        }
        let line = line_of(&record);

        if record.len() < 3 {
            tracing::warn!("Skipping recipe line {}: expected name, price and ingredients", line);
            skipped += 1;
            continue;
        }

        let name = &record[0];
        if name.is_empty() {
            tracing::warn!("Skipping recipe line {}: empty cake name", line);
            skipped += 1;
            continue;
        }

        let price = match record[1].parse::<f64>() {
            Ok(price) if price.is_finite() && price >= 0.0 => price,
            _ => {
                tracing::warn!("Skipping recipe '{}' (line {}): invalid price '{}'", name, line, &record[1]);
                skipped += 1;
                continue;
            }
        };

        let mut recipe = Recipe::new(name, price);
        let fields: Vec<&str> = record.iter().skip(2).collect();
        for pair in fields.chunks(2) {
            match pair {
                [ingredient, amount] if !ingredient.is_empty() => match amount.parse::<u64>() {
                    Ok(amount) => recipe.set_ingredient(*ingredient, amount),
                    Err(_) => tracing::warn!(
                        "Recipe '{}' (line {}): ignoring '{}' with invalid quantity '{}'",
                        name,
                        line,
                        ingredient,
                        amount
                    ),
                },
                _ => tracing::warn!(
                    "Recipe '{}' (line {}): ignoring incomplete ingredient entry {:?}",
                    name,
                    line,
                    pair
                ),
            }
        }

        catalog.insert(recipe);
    }

    tracing::info!("Loaded {} recipes ({} lines skipped)", catalog.len(), skipped);
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::StoreError;

    #[test]
    fn test_parse_recipes() {
        let data = b"# name,price,ingredient,qty...
Devil's Food, 24.50, Flour, 2, Cocoa, 3

Lemon,18,Lemons,4,Sugar,1
";
        let catalog = parse_recipes(data).unwrap();

        assert_eq!(catalog.len(), 2);
        let devils = catalog.get("devil's food").unwrap();
        assert_eq!(devils.name, "Devil's Food");
        assert_eq!(devils.price, 24.5);
        assert_eq!(devils.quantity_of("Flour"), Some(2));
        assert_eq!(devils.quantity_of("Cocoa"), Some(3));
        assert_eq!(catalog.recipes()[1].name, "Lemon");
    }

    #[test]
    fn test_bad_price_skips_line() {
        let data = b"Carrot,cheap,Carrots,3\nLemon,18,Lemons,4\nPlain,12\n";
        let catalog = parse_recipes(data).unwrap();

        assert_eq!(catalog.len(), 1);
        assert!(catalog.get("carrot").is_none());
        assert!(catalog.get("plain").is_none());
    }

    #[test]
    fn test_bad_pairs_are_dropped_individually() {
        let data = b"Marble,22,Flour,2,Cocoa,lots,Eggs,-1,,3,Butter\n";
        let catalog = parse_recipes(data).unwrap();

        let marble = catalog.get("Marble").unwrap();
        assert_eq!(marble.ingredients.len(), 1);
        assert_eq!(marble.quantity_of("Flour"), Some(2));
        assert_eq!(marble.quantity_of("Butter"), None);
    }

    #[test]
    fn test_negative_price_skips_line() {
        let catalog = parse_recipes(b"Refund,-5,Flour,1\n").unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_indented_comment_is_ignored() {
        let catalog = parse_recipes(b"   # Marble,22,Flour,2\nLemon,18,Lemons,4\n").unwrap();

        assert_eq!(catalog.len(), 1);
        assert!(catalog.get("# Marble").is_none());
        assert!(catalog.get("Lemon").is_some());
    }

    #[test]
    fn test_invalid_utf8_fails_the_load() {
        let err = parse_recipes(b"Lemon,18,Lem\xf0ns,4\n").unwrap_err();

        assert!(matches!(err, StoreError::CsvError(_)));
    }
}

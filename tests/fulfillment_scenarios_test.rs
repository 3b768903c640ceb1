use bundt_store::core::engine::MissReason;
use bundt_store::core::{IngredientAmount, InventoryEntry, Order, Recipe, Variant};
use bundt_store::domain::model::round_cents;
use bundt_store::{FulfillmentEngine, InventoryLedger, RecipeCatalog};

fn flour_and_sugar() -> InventoryLedger {
    let mut ledger = InventoryLedger::new();
    ledger.insert("Flour", InventoryEntry::new(10, 0.5));
    ledger.insert("Sugar", InventoryEntry::new(4, 1.0));
    ledger
}

fn two_flour_one_sugar() -> Vec<IngredientAmount> {
    Recipe::new("Vanilla", 20.0)
        .with_ingredient("Flour", 2)
        .with_ingredient("Sugar", 1)
        .ingredients
}

#[test]
fn test_deduct_three_cakes_costs_six() {
    let mut ledger = flour_and_sugar();

    let cost = ledger.deduct(&two_flour_one_sugar(), 3).unwrap();

    assert_eq!(cost, 6.0);
    assert_eq!(ledger.get("Flour"), Some(&InventoryEntry::new(4, 0.5)));
    assert_eq!(ledger.get("Sugar"), Some(&InventoryEntry::new(1, 1.0)));
}

#[test]
fn test_deduct_five_cakes_fails_and_leaves_ledger_unchanged() {
    let mut ledger = flour_and_sugar();
    let before = ledger.clone();

    assert!(!ledger.can_fulfill(&two_flour_one_sugar(), 5));
    assert!(ledger.deduct(&two_flour_one_sugar(), 5).is_err());
    assert_eq!(ledger, before);

    let catalog: RecipeCatalog = [Recipe::new("Vanilla", 20.0)
        .with_ingredient("Flour", 2)
        .with_ingredient("Sugar", 1)]
    .into_iter()
    .collect();
    let report = FulfillmentEngine::new(&catalog, &mut ledger).run(&[Order::new("Ada", "Vanilla", 5)]);

    assert!(report.fulfilled.is_empty());
    assert_eq!(report.missed[0].order.customer, "Ada");
    assert_eq!(ledger, before);
}

#[test]
fn test_mini_of_unknown_base_is_missed_regardless_of_stock() {
    let catalog: RecipeCatalog = [Recipe::new("Chocolate", 20.0).with_ingredient("Flour", 1)]
        .into_iter()
        .collect();
    let mut ledger = flour_and_sugar();
    let before = ledger.clone();

    let report =
        FulfillmentEngine::new(&catalog, &mut ledger).run(&[Order::new("Ada", "Vanilla (Mini)", 1)]);

    assert_eq!(report.missed.len(), 1);
    assert_eq!(report.missed[0].reason, MissReason::UnknownCake);
    assert_eq!(ledger, before);
}

#[test]
fn test_resolution_ignores_case_and_padding() {
    let catalog: RecipeCatalog = [Recipe::new("Devil's Food", 24.0).with_ingredient("Cocoa", 2)]
        .into_iter()
        .collect();

    let canonical = catalog.resolve("Devil's Food").unwrap();
    assert_eq!(catalog.resolve("devil's food").unwrap(), canonical);
    assert_eq!(catalog.resolve(" DEVIL'S FOOD ").unwrap(), canonical);
}

#[test]
fn test_variant_arithmetic() {
    let base = Recipe::new("Marble", 17.35)
        .with_ingredient("Flour", 5)
        .with_ingredient("Cocoa", 1)
        .with_ingredient("Salt", 0);

    let mini = base.variant(Variant::Mini);
    let premium = base.variant(Variant::Premium);

    for (i, ingredient) in base.ingredients.iter().enumerate() {
        assert_eq!(mini.ingredients[i].per_cake, std::cmp::max(1, ingredient.per_cake / 2));
        assert_eq!(
            premium.ingredients[i].per_cake,
            (ingredient.per_cake as f64 * 1.5).floor() as u64
        );
    }
    assert_eq!(mini.price, round_cents(17.35 * 0.6));
    assert_eq!(premium.price, round_cents(17.35 * 1.4));
}

#[test]
fn test_fulfilled_orders_keep_input_order_and_revenue_adds_up() {
    let catalog: RecipeCatalog = [
        Recipe::new("Lemon", 15.0).with_ingredient("Lemons", 2),
        Recipe::new("Chocolate", 22.5).with_ingredient("Cocoa", 3),
        Recipe::new("Carrot", 18.0).with_ingredient("Carrots", 4),
    ]
    .into_iter()
    .collect();
    let mut ledger = InventoryLedger::new();
    ledger.insert("Lemons", InventoryEntry::new(100, 0.3));
    ledger.insert("Cocoa", InventoryEntry::new(100, 1.1));
    ledger.insert("Carrots", InventoryEntry::new(100, 0.2));

    let orders = vec![
        Order::new("Carol", "Carrot", 2),
        Order::new("Ada", "Lemon (Premium)", 1),
        Order::new("Bob", "chocolate", 3),
        Order::new("Dee", "LEMON (MINI)", 4),
    ];

    let report = FulfillmentEngine::new(&catalog, &mut ledger).run(&orders);

    let customers: Vec<&str> = report
        .fulfilled
        .iter()
        .map(|f| f.order.customer.as_str())
        .collect();
    assert_eq!(customers, vec!["Carol", "Ada", "Bob", "Dee"]);

    let expected: f64 = report
        .fulfilled
        .iter()
        .map(|f| f.recipe.price * f.order.quantity as f64)
        .sum();
    assert!((report.total_revenue - expected).abs() < 1e-9);
    assert!((report.total_revenue - (36.0 + 21.0 + 67.5 + 36.0)).abs() < 1e-9);
    assert!(report.missed.is_empty());
}

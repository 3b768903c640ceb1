use crate::app::report::{
    write_fulfilled_report, write_inventory_report, write_missed_report, write_recipe_list,
    write_sales_summary, RecipeCard,
};
use crate::core::batch::BatchOutcome;
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    InventoryReport,
    FulfilledOrders,
    MissedOrders,
    SalesSummary,
    BrowseRecipes,
    Quit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 6] = [
        MenuAction::InventoryReport,
        MenuAction::FulfilledOrders,
        MenuAction::MissedOrders,
        MenuAction::SalesSummary,
        MenuAction::BrowseRecipes,
        MenuAction::Quit,
    ];

    pub fn key(self) -> &'static str {
        match self {
            MenuAction::InventoryReport => "1",
            MenuAction::FulfilledOrders => "2",
            MenuAction::MissedOrders => "3",
            MenuAction::SalesSummary => "4",
            MenuAction::BrowseRecipes => "5",
            MenuAction::Quit => "Q",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::InventoryReport => "View Inventory Report",
            MenuAction::FulfilledOrders => "View Fulfilled Orders",
            MenuAction::MissedOrders => "View Missed Orders",
            MenuAction::SalesSummary => "View Sales Summary",
            MenuAction::BrowseRecipes => "View Recipes",
            MenuAction::Quit => "Quit",
        }
    }

    /// Map a line of user input to an action; case and surrounding whitespace are ignored.
    pub fn parse(input: &str) -> Option<MenuAction> {
        let input = input.trim();
        Self::ALL
            .into_iter()
            .find(|action| action.key().eq_ignore_ascii_case(input))
    }
}

/// Text menu over the results of a batch run.
pub struct Menu<'a, R, W> {
    outcome: &'a BatchOutcome,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(outcome: &'a BatchOutcome, input: R, output: W) -> Self {
        Self {
            outcome,
            input,
            output,
        }
    }

    /// Loop until the user quits or input runs out.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "\n{} - Main Menu", self.outcome.store_name)?;
            for action in MenuAction::ALL {
                writeln!(self.output, "{}. {}", action.key(), action.label())?;
            }

            let Some(choice) = self.prompt("Enter your choice: ")? else {
                return Ok(());
            };
            match MenuAction::parse(&choice) {
                Some(MenuAction::Quit) => {
                    writeln!(
                        self.output,
                        "Exiting the {} Order System. Goodbye!",
                        self.outcome.store_name
                    )?;
                    return Ok(());
                }
                Some(action) => self.dispatch(action)?,
                None => writeln!(self.output, "Invalid option. Please try again.")?,
            }
        }
    }

    pub fn dispatch(&mut self, action: MenuAction) -> io::Result<()> {
        let outcome = self.outcome;
        match action {
            MenuAction::InventoryReport => write_inventory_report(&mut self.output, &outcome.ledger),
            MenuAction::FulfilledOrders => write_fulfilled_report(&mut self.output, &outcome.report),
            MenuAction::MissedOrders => write_missed_report(&mut self.output, &outcome.report),
            MenuAction::SalesSummary => write_sales_summary(&mut self.output, &outcome.report),
            MenuAction::BrowseRecipes => self.browse_recipes(),
            MenuAction::Quit => Ok(()),
        }
    }

    fn browse_recipes(&mut self) -> io::Result<()> {
        let outcome = self.outcome;
        let catalog = &outcome.catalog;
        write_recipe_list(&mut self.output, catalog)?;

        let Some(choice) =
            self.prompt("\nSelect a cake number to view its recipe (0 to cancel): ")?
        else {
            return Ok(());
        };
        // negative numbers parse and then fail the range check
        let selected = match choice.trim().parse::<i64>() {
            Ok(0) => return Ok(()),
            Ok(n) => usize::try_from(n)
                .ok()
                .and_then(|n| catalog.recipes().get(n - 1)),
            Err(_) => return writeln!(self.output, "Invalid input."),
        };
        match selected {
            Some(recipe) => writeln!(self.output, "\n{}", RecipeCard(recipe)),
            None => writeln!(self.output, "Invalid selection."),
        }
    }

    /// Print `text` and read one line; `None` once input is exhausted.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

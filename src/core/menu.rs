//! Interactive menu driving a [`StoreContainer`].
//!
//! The top level is a small state machine over [`MenuState`]. Adding a store
//! runs a nested machine over [`DraftStep`] that collects products until the
//! user declines, then commits the store. End of input at any prompt ends the
//! session as if `Exit` had been chosen; a half-built store is dropped.

use crate::core::input::{parse_date_or_today, Prompter};
use crate::domain::model::{Product, Store, StoreContainer};
use crate::utils::error::Result;
use std::io::{BufRead, Write};

pub const MENU_LINES: [&str; 5] = [
    "Menu:",
    "1. Add a new store",
    "2. View list of stores",
    "3. Remove a store",
    "4. Exit program",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Menu,
    AddStore,
    List,
    Remove,
    Exit,
}

impl MenuState {
    pub fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(Self::AddStore),
            2 => Some(Self::List),
            3 => Some(Self::Remove),
            4 => Some(Self::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DraftStep {
    AskForProduct,
    CollectProduct,
    Commit,
}

pub struct Menu<R, W> {
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(prompter: Prompter<R, W>) -> Self {
        Self { prompter }
    }

    pub fn into_prompter(self) -> Prompter<R, W> {
        self.prompter
    }

    pub fn run(&mut self, container: &mut StoreContainer) -> Result<()> {
        let mut state = MenuState::Menu;
        while state != MenuState::Exit {
            tracing::debug!("Menu state: {:?}", state);
            state = match state {
                MenuState::Menu => self.choose()?,
                MenuState::AddStore => self.add_store(container)?,
                MenuState::List => self.list_stores(container)?,
                MenuState::Remove => self.remove_store(container)?,
                MenuState::Exit => MenuState::Exit,
            };
        }
        Ok(())
    }

    fn choose(&mut self) -> Result<MenuState> {
        for line in MENU_LINES {
            self.prompter.say(line)?;
        }

        let Some(choice) = self.prompter.prompt_number::<i64>("Select an option: ")? else {
            return Ok(MenuState::Exit);
        };

        match MenuState::from_choice(choice) {
            Some(MenuState::Exit) => {
                self.prompter.say("Program terminated.")?;
                Ok(MenuState::Exit)
            }
            Some(next) => Ok(next),
            None => {
                tracing::debug!("Invalid menu choice {}", choice);
                self.prompter.say("Invalid choice. Try again.")?;
                Ok(MenuState::Menu)
            }
        }
    }

    fn add_store(&mut self, container: &mut StoreContainer) -> Result<MenuState> {
        let Some(name) = self.prompter.prompt("Enter store name: ")? else {
            return Ok(MenuState::Exit);
        };

        let mut store = Store::new(name);
        let mut step = DraftStep::AskForProduct;
        loop {
            step = match step {
                DraftStep::AskForProduct => {
                    match self.prompter.prompt("Add a product to the store (Y/N)? ")? {
                        None => return Ok(MenuState::Exit),
                        Some(answer) if answer.trim().eq_ignore_ascii_case("y") => {
                            DraftStep::CollectProduct
                        }
                        Some(_) => DraftStep::Commit,
                    }
                }
                DraftStep::CollectProduct => match self.read_product()? {
                    Some(product) => {
                        store.add_product(product);
                        DraftStep::AskForProduct
                    }
                    None => return Ok(MenuState::Exit),
                },
                DraftStep::Commit => break,
            };
        }

        tracing::debug!(
            "Committing store '{}' with {} products",
            store.name(),
            store.products().len()
        );
        container.add_store(store);
        self.prompter.say("Store added!")?;
        Ok(MenuState::Menu)
    }

    fn read_product(&mut self) -> Result<Option<Product>> {
        let Some(name) = self.prompter.prompt("Product name: ")? else {
            return Ok(None);
        };
        let Some(unit) = self.prompter.prompt("Unit: ")? else {
            return Ok(None);
        };
        let Some(quantity) = self.prompter.prompt_number::<i32>("Quantity: ")? else {
            return Ok(None);
        };
        let Some(price) = self.prompter.prompt_number::<i32>("Price: ")? else {
            return Ok(None);
        };
        let Some(raw_date) = self.prompter.prompt("Arrival date (YYYY-MM-DD): ")? else {
            return Ok(None);
        };
        let arrival_date = parse_date_or_today(&raw_date);
        let Some(description) = self.prompter.prompt("Description: ")? else {
            return Ok(None);
        };

        Ok(Some(Product::new(
            name,
            unit,
            quantity,
            price,
            arrival_date,
            description,
        )))
    }

    fn list_stores(&mut self, container: &StoreContainer) -> Result<MenuState> {
        self.prompter.say("List of stores:")?;
        if container.is_empty() {
            self.prompter.say("(no stores)")?;
        }
        for (index, store) in container.stores().iter().enumerate() {
            self.prompter.say(&format!("{}. {}", index, store))?;
        }
        Ok(MenuState::Menu)
    }

    fn remove_store(&mut self, container: &mut StoreContainer) -> Result<MenuState> {
        let Some(index) = self
            .prompter
            .prompt_number::<i64>("Enter the index of the store to remove: ")?
        else {
            return Ok(MenuState::Exit);
        };

        match usize::try_from(index)
            .ok()
            .and_then(|i| container.remove_store(i))
        {
            Some(store) => tracing::debug!("Removed store '{}' at index {}", store.name(), index),
            None => tracing::debug!("No store at index {}", index),
        }

        self.prompter.say("Store removed (if found).")?;
        Ok(MenuState::Menu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, NaiveDate};
    use std::io::Cursor;

    fn run_session(input: &str, container: &mut StoreContainer) -> String {
        run_session_bytes(input.as_bytes(), container)
    }

    fn run_session_bytes(input: &[u8], container: &mut StoreContainer) -> String {
        let prompter = Prompter::new(Cursor::new(input.to_vec()), Vec::new());
        let mut menu = Menu::new(prompter);
        menu.run(container).unwrap();
        String::from_utf8(menu.into_prompter().into_inner().1).unwrap()
    }

    fn container_of(names: &[&str]) -> StoreContainer {
        let mut container = StoreContainer::new();
        for name in names {
            container.add_store(Store::new(*name));
        }
        container
    }

    #[test]
    fn test_add_store_with_products() {
        let mut container = StoreContainer::new();
        let input = "1\nCorner Shop\ny\nApples\nkg\n10\n250\n2024-03-15\nRed ones\n\
                     Y\nFlour\nbag\n2\n120\n2024-03-16\n\nn\n4\n";

        let out = run_session(input, &mut container);

        assert_eq!(container.len(), 1);
        let store = &container.stores()[0];
        assert_eq!(store.name(), "Corner Shop");
        assert_eq!(store.products().len(), 2);

        let apples = &store.products()[0];
        assert_eq!(apples.name(), "Apples");
        assert_eq!(apples.unit(), "kg");
        assert_eq!(apples.quantity(), 10);
        assert_eq!(apples.price(), 250);
        assert_eq!(
            apples.arrival_date(),
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
        );
        assert_eq!(apples.description(), "Red ones");
        assert_eq!(store.products()[1].description(), "");

        assert!(out.contains("Store added!"));
        assert!(out.contains("Program terminated."));
    }

    #[test]
    fn test_add_store_without_products_still_commits() {
        let mut container = StoreContainer::new();
        run_session("1\nEmpty\nmaybe\n4\n", &mut container);

        assert_eq!(container.len(), 1);
        assert!(container.stores()[0].products().is_empty());
    }

    #[test]
    fn test_bad_date_falls_back_to_today() {
        let mut container = StoreContainer::new();
        let before = Local::now().date_naive();
        let out = run_session(
            "1\nS\ny\nP\npc\n1\n1\n2024-02-30\nd\nn\n4\n",
            &mut container,
        );

        assert!(!out.contains("Error parsing date"));
        let date = container.stores()[0].products()[0].arrival_date();
        assert!(date >= before);
    }

    #[test]
    fn test_malformed_numbers_reprompt() {
        let mut container = StoreContainer::new();
        let out = run_session(
            "one\n1\nS\ny\nP\npc\nlots\n5\n9.99\n9\n2024-01-01\nd\nn\n4\n",
            &mut container,
        );

        let product = &container.stores()[0].products()[0];
        assert_eq!(product.quantity(), 5);
        assert_eq!(product.price(), 9);
        assert_eq!(out.matches("Please enter a whole number.").count(), 3);
    }

    #[test]
    fn test_invalid_utf8_choice_reprompts() {
        let mut container = StoreContainer::new();
        let out = run_session_bytes(b"\xff\n1\nKept\nn\n4\n", &mut container);

        assert_eq!(container.len(), 1);
        assert_eq!(container.stores()[0].name(), "Kept");
        assert_eq!(out.matches("Please enter a whole number.").count(), 1);
    }

    #[test]
    fn test_invalid_utf8_description_keeps_draft() {
        let mut container = StoreContainer::new();
        run_session_bytes(
            b"1\nCafe\ny\nTea\ncup\n1\n3\n2024-01-01\ncaf\xe9\nn\n4\n",
            &mut container,
        );

        assert_eq!(container.len(), 1);
        let product = &container.stores()[0].products()[0];
        assert_eq!(product.description(), "caf\u{FFFD}");
    }

    #[test]
    fn test_list_stores_with_indices() {
        let mut container = container_of(&["North", "South"]);
        let out = run_session("2\n4\n", &mut container);

        assert!(out.contains("List of stores:"));
        assert!(out.contains("0. Store{name='North', products=[]}"));
        assert!(out.contains("1. Store{name='South', products=[]}"));
    }

    #[test]
    fn test_list_empty_container() {
        let mut container = StoreContainer::new();
        let out = run_session("2\n4\n", &mut container);
        assert!(out.contains("(no stores)"));
    }

    #[test]
    fn test_remove_store_bounds() {
        let mut container = container_of(&["a", "b", "c"]);
        let out = run_session("3\n-1\n3\n3\n3\n1\n4\n", &mut container);

        let names: Vec<&str> = container.stores().iter().map(Store::name).collect();
        assert_eq!(names, vec!["a", "c"]);
        assert_eq!(out.matches("Store removed (if found).").count(), 3);
    }

    #[test]
    fn test_invalid_choice_leaves_container_unchanged() {
        let mut container = container_of(&["a"]);
        let before = container.clone();
        let out = run_session("0\n7\n-3\n4\n", &mut container);

        assert_eq!(container, before);
        assert_eq!(out.matches("Invalid choice. Try again.").count(), 3);
        assert_eq!(out.matches("Menu:").count(), 4);
    }

    #[test]
    fn test_eof_ends_session() {
        let mut container = StoreContainer::new();
        run_session("", &mut container);
        assert!(container.is_empty());
    }

    #[test]
    fn test_eof_mid_store_discards_draft() {
        let mut container = container_of(&["kept"]);
        run_session("1\nDraft\ny\nWidget\n", &mut container);

        assert_eq!(container.len(), 1);
        assert_eq!(container.stores()[0].name(), "kept");
    }
}

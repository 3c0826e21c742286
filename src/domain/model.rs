use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One inventory line item. Identity is its position within a [`Store`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    name: String,
    unit: String,
    quantity: i32,
    price: i32,
    arrival_date: NaiveDate,
    description: String,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        unit: impl Into<String>,
        quantity: i32,
        price: i32,
        arrival_date: NaiveDate,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
            quantity,
            price,
            arrival_date,
            description: description.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    pub fn price(&self) -> i32 {
        self.price
    }

    pub fn arrival_date(&self) -> NaiveDate {
        self.arrival_date
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Product{{name='{}', unit='{}', quantity={}, price={}, arrivalDate={}, description='{}'}}",
            self.name, self.unit, self.quantity, self.price, self.arrival_date, self.description
        )
    }
}

/// A named, append-only list of products.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    name: String,
    products: Vec<Product>,
}

impl Store {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            products: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_product(&mut self, product: Product) {
        self.products.push(product);
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

impl fmt::Display for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Store{{name='{}', products=[", self.name)?;
        for (i, product) in self.products.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{product}")?;
        }
        write!(f, "]}}")
    }
}

/// Root aggregate; the unit of persistence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreContainer {
    stores: Vec<Store>,
}

impl StoreContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_store(&mut self, store: Store) {
        self.stores.push(store);
    }

    /// Removes the store at `index`. Out-of-range indices leave the container untouched.
    pub fn remove_store(&mut self, index: usize) -> Option<Store> {
        if index < self.stores.len() {
            Some(self.stores.remove(index))
        } else {
            None
        }
    }

    pub fn stores(&self) -> &[Store] {
        &self.stores
    }

    pub fn len(&self) -> usize {
        self.stores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }
}

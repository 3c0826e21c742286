use crate::domain::model::{Product, Store, StoreContainer};
use chrono::Local;
use rand::Rng;

pub const STORE_COUNT: usize = 3;
pub const PRODUCTS_PER_STORE: usize = 5;
pub const UNIT_LABEL: &str = "Unit";

/// Appends [`STORE_COUNT`] sample stores of [`PRODUCTS_PER_STORE`] products each.
/// Existing stores are left alone.
pub fn generate<G: Rng>(container: &mut StoreContainer, rng: &mut G) {
    let today = Local::now().date_naive();

    for i in 0..STORE_COUNT {
        let mut store = Store::new(format!("Store{}", i + 1));

        for j in 0..PRODUCTS_PER_STORE {
            let name = format!("Product{}", j + 1);
            let quantity = rng.random_range(1..=10);
            let price = rng.random_range(10..=109);
            let description = format!("Description for {}", name);

            store.add_product(Product::new(
                name,
                UNIT_LABEL,
                quantity,
                price,
                today,
                description,
            ));
        }

        container.add_store(store);
    }

    tracing::info!(
        "Generated {} sample stores with {} products each",
        STORE_COUNT,
        PRODUCTS_PER_STORE
    );
}

pub fn generate_sample_data(container: &mut StoreContainer) {
    generate(container, &mut rand::rng());
}

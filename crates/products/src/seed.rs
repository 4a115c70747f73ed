//! Fixed records loaded at startup.

use crate::product::{Product, ProductId};

/// The three catalog entries every fresh store starts with.
pub fn seed_products() -> [(ProductId, Product); 3] {
    [
        (ProductId(1), Product::new(1, "sku1", "manufacturer1", 1, 10, 100)),
        (ProductId(200), Product::new(200, "sku2", "manufacturer2", 2, 20, 200)),
        (ProductId(3000), Product::new(3000, "sku3", "manufacturer3", 3, 30, 300)),
    ]
}

use serde::Deserialize;

fn default_quantity() -> i32 {
    1
}

/// Form payload emitted by the add-to-cart button on a product page.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub sweet_id: i32,
    #[serde(default = "default_quantity")]
    pub quantity: i32,
}

/// Form payload emitted by the quantity inputs on the cart page.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub sweet_id: i32,
    pub quantity: i32,
}

/// Form payload emitted by the remove buttons on the cart page.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub sweet_id: i32,
}

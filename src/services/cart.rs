use serde::Serialize;

use crate::domain::cart::Cart;
use crate::domain::sweet::Sweet;
use crate::repository::SweetReader;
use crate::services::{ServiceError, ServiceResult};

/// One resolved cart line, priced against the current catalog row.
#[derive(Debug, Serialize)]
pub struct CartLine {
    pub sweet_id: i32,
    pub name: String,
    pub slug: String,
    pub image: Option<String>,
    pub price_cents: i32,
    pub price_formatted: String,
    pub quantity: i32,
    pub line_total_cents: i32,
    pub line_total_formatted: String,
}

/// Data required to render the cart page.
#[derive(Debug, Serialize)]
pub struct CartPageData {
    pub lines: Vec<CartLine>,
    pub total_cents: i32,
    pub total_formatted: String,
    /// True when lines were dropped or clamped against the catalog; the
    /// caller should write the adjusted cart back to the session.
    pub adjusted: bool,
}

fn format_cents(cents: i32) -> String {
    format!("{:.2}", cents as f64 / 100.0)
}

/// Resolve the session cart against current catalog rows. Lines whose sweet
/// has been deleted are pruned and quantities are clamped to the available
/// stock; the passed cart is mutated to match what is shown.
pub fn resolve_cart<R>(repo: &R, cart: &mut Cart) -> ServiceResult<CartPageData>
where
    R: SweetReader + ?Sized,
{
    let mut lines = Vec::with_capacity(cart.items.len());
    let mut kept = Vec::with_capacity(cart.items.len());
    let mut adjusted = false;

    for item in &cart.items {
        let Some(sweet) = repo.get_sweet_by_id(item.sweet_id)? else {
            adjusted = true;
            continue;
        };

        let quantity = item.quantity.min(sweet.stock_level);
        if quantity != item.quantity {
            adjusted = true;
        }
        if quantity < 1 {
            continue;
        }

        let line_total_cents = sweet.price_cents.saturating_mul(quantity);
        lines.push(CartLine {
            sweet_id: sweet.id,
            name: sweet.name.clone(),
            slug: sweet.slug.clone(),
            image: sweet.image.clone(),
            price_cents: sweet.price_cents,
            price_formatted: format_cents(sweet.price_cents),
            quantity,
            line_total_cents,
            line_total_formatted: format_cents(line_total_cents),
        });
        kept.push(crate::domain::cart::CartItem {
            sweet_id: sweet.id,
            quantity,
        });
    }

    cart.items = kept;

    let total_cents = lines
        .iter()
        .fold(0i32, |acc, line| acc.saturating_add(line.line_total_cents));

    Ok(CartPageData {
        lines,
        total_cents,
        total_formatted: format_cents(total_cents),
        adjusted,
    })
}

/// Validate an add-to-cart request against the catalog and apply it.
pub fn add_to_cart<R>(
    repo: &R,
    cart: &mut Cart,
    sweet_id: i32,
    quantity: i32,
) -> ServiceResult<Sweet>
where
    R: SweetReader + ?Sized,
{
    if quantity < 1 {
        return Err(ServiceError::Form("Quantity must be at least 1.".to_string()));
    }

    let sweet = repo
        .get_sweet_by_id(sweet_id)?
        .ok_or(ServiceError::NotFound)?;

    if !sweet.in_stock() {
        return Err(ServiceError::Form(format!(
            "{} is out of stock.",
            sweet.name
        )));
    }

    cart.add(sweet.id, quantity.min(sweet.stock_level));

    Ok(sweet)
}

/// Replace a line's quantity; zero removes the line.
pub fn update_quantity<R>(
    repo: &R,
    cart: &mut Cart,
    sweet_id: i32,
    quantity: i32,
) -> ServiceResult<()>
where
    R: SweetReader + ?Sized,
{
    if quantity < 0 {
        return Err(ServiceError::Form("Quantity cannot be negative.".to_string()));
    }

    if quantity == 0 {
        cart.remove(sweet_id);
        return Ok(());
    }

    let sweet = repo
        .get_sweet_by_id(sweet_id)?
        .ok_or(ServiceError::NotFound)?;

    cart.set_quantity(sweet.id, quantity.min(sweet.stock_level.max(0)));

    Ok(())
}

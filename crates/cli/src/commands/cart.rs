//! Cart commands.
//!
//! All of these act on the file-backed slot under the configured data
//! directory, so the cart survives between invocations.

use std::io::{self, Write};

use tradewear_core::{ProductId, Quantity, format_won};
use tradewear_storefront::cart::{AddOutcome, CartState};
use tradewear_storefront::config::StorefrontConfig;
use tradewear_storefront::error::{AppError, Result, add_breadcrumb};

use super::{cart_manager, load_records};

/// Print every cart line followed by the totals.
pub fn show(config: &StorefrontConfig) -> Result<()> {
    let manager = cart_manager(config);
    let items = manager.get_cart();

    let mut out = io::stdout().lock();
    if items.is_empty() {
        writeln!(out, "Cart is empty")?;
        return Ok(());
    }

    for item in &items {
        writeln!(
            out,
            "{}\t{}\t{} x {}\t{}",
            item.product_id,
            item.product_name,
            format_won(item.price),
            item.quantity,
            format_won(item.line_total())
        )?;
    }

    let summary = manager.summary();
    if let Some(seller) = &summary.seller {
        writeln!(out, "Seller: {seller}")?;
    }
    writeln!(
        out,
        "{} lines, {} units, subtotal {}",
        summary.line_count,
        summary.item_count,
        format_won(summary.subtotal)
    )?;
    Ok(())
}

/// Add `quantity` units of a catalog product.
///
/// Refuses to discard another seller's cart unless `replace` is set.
pub fn add(config: &StorefrontConfig, product_id: &str, quantity: u32, replace: bool) -> Result<()> {
    let quantity = Quantity::new(quantity).map_err(|e| AppError::BadRequest(e.to_string()))?;

    let records = load_records(config)?;
    let product = records
        .product(&ProductId::new(product_id))
        .ok_or_else(|| AppError::NotFound(format!("product {product_id}")))?;

    let manager = cart_manager(config);
    if !replace && manager.seller_conflict(&product.seller) {
        let current = match manager.state() {
            CartState::SingleSeller(seller) => seller.to_string(),
            CartState::Empty => String::new(),
        };
        return Err(AppError::BadRequest(format!(
            "cart holds products from seller {current}; pass --replace to start a new cart with {}",
            product.seller
        )));
    }

    add_breadcrumb("cart", "Add to cart", Some(&[("product_id", product_id)]));
    let outcome = manager.add_to_cart(product.to_cart_item(quantity))?;

    let mut out = io::stdout().lock();
    match outcome {
        AddOutcome::Appended => writeln!(out, "Added {} x {quantity}", product.title)?,
        AddOutcome::Merged { quantity } => {
            writeln!(out, "{} now has {quantity} units", product.title)?;
        }
        AddOutcome::ReplacedSeller { previous } => writeln!(
            out,
            "Removed items from seller {previous}; added {} x {quantity}",
            product.title
        )?,
    }
    Ok(())
}

/// Remove a product line.
pub fn remove(config: &StorefrontConfig, product_id: &str) -> Result<()> {
    let removed = cart_manager(config).remove_from_cart(&ProductId::new(product_id))?;

    let mut out = io::stdout().lock();
    if removed {
        writeln!(out, "Removed {product_id}")?;
    } else {
        writeln!(out, "{product_id} is not in the cart")?;
    }
    Ok(())
}

/// Empty the cart.
pub fn clear(config: &StorefrontConfig) -> Result<()> {
    cart_manager(config).clear_cart()?;
    writeln!(io::stdout().lock(), "Cart cleared")?;
    Ok(())
}

/// Print the total number of units in the cart.
pub fn count(config: &StorefrontConfig) -> Result<()> {
    let count = cart_manager(config).item_count();
    writeln!(io::stdout().lock(), "{count}")?;
    Ok(())
}

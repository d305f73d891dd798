//! Record list commands.

use std::io::{self, Write};

use tradewear_core::{Order, Product, RegistrationRequest, format_won};
use tradewear_storefront::catalog::{QueryResult, Record};
use tradewear_storefront::config::StorefrontConfig;
use tradewear_storefront::error::Result;

use super::load_records;

/// List products matching `query`, `params`, and `sort`.
pub fn products(
    config: &StorefrontConfig,
    query: &str,
    params: &[(&str, &str)],
    sort: Option<&str>,
) -> Result<()> {
    let records = load_records(config)?;
    let criteria = Product::criteria_from_params(query, params, sort);
    let result = QueryResult::collect(&records.products, &criteria);

    let mut out = io::stdout().lock();
    for product in &result.items {
        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}",
            product.id,
            product.title,
            product.category,
            product.seller_name,
            format_won(product.price)
        )?;
    }
    write_footer(&mut out, result.matched(), result.total, "products")?;
    Ok(())
}

/// List orders matching `query`, `status`, and `sort`.
pub fn orders(
    config: &StorefrontConfig,
    query: &str,
    status: Option<&str>,
    sort: Option<&str>,
) -> Result<()> {
    let records = load_records(config)?;
    let params: Vec<(&str, &str)> = status.map(|s| ("status", s)).into_iter().collect();
    let criteria = Order::criteria_from_params(query, &params, sort);
    let result = QueryResult::collect(&records.orders, &criteria);

    let mut out = io::stdout().lock();
    for order in &result.items {
        writeln!(
            out,
            "{}\t{}\t{}\t{} -> {}\t{}\t{}",
            order.order_number,
            order.status.label(),
            order.product.title,
            order.seller.name,
            order.buyer.name,
            order.quantity,
            format_won(order.total_price)
        )?;
    }
    write_footer(&mut out, result.matched(), result.total, "orders")?;
    Ok(())
}

/// List registration requests matching `query`, `status`, and `sort`.
pub fn registrations(
    config: &StorefrontConfig,
    query: &str,
    status: Option<&str>,
    sort: Option<&str>,
) -> Result<()> {
    let records = load_records(config)?;
    let params: Vec<(&str, &str)> = status.map(|s| ("status", s)).into_iter().collect();
    let criteria = RegistrationRequest::criteria_from_params(query, &params, sort);
    let result = QueryResult::collect(&records.registrations, &criteria);

    let mut out = io::stdout().lock();
    for request in &result.items {
        writeln!(
            out,
            "{}\t{}\t{}\t{}",
            request.id,
            request.email,
            request.display_phone(),
            request.status.label()
        )?;
    }
    write_footer(&mut out, result.matched(), result.total, "registration requests")?;
    Ok(())
}

fn write_footer(out: &mut impl Write, matched: usize, total: usize, noun: &str) -> io::Result<()> {
    writeln!(out, "{matched} of {total} {noun}")
}

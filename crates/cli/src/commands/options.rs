//! Selector option listing.

use std::io::{self, Write};

use clap::ValueEnum;
use tradewear_storefront::catalog::Selection;
use tradewear_storefront::config::StorefrontConfig;
use tradewear_storefront::error::Result;
use tradewear_storefront::options::{
    SelectOptions, category_options, order_sort_options, order_status_options,
    product_sort_options, registration_sort_options, registration_status_options,
};

use super::load_records;

/// Which selector to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OptionsKind {
    ProductSort,
    OrderSort,
    RegistrationSort,
    OrderStatus,
    RegistrationStatus,
    Category,
}

/// Print the options of `kind`, marking the default selection with `*`.
///
/// The first column is the value accepted by the matching list flag.
pub fn list(config: &StorefrontConfig, kind: OptionsKind) -> Result<()> {
    let mut out = io::stdout().lock();
    match kind {
        OptionsKind::ProductSort => {
            write_options(&mut out, &product_sort_options(), |s| s.as_str().to_owned())?;
        }
        OptionsKind::OrderSort => {
            write_options(&mut out, &order_sort_options(), |s| s.as_str().to_owned())?;
        }
        OptionsKind::RegistrationSort => {
            write_options(&mut out, &registration_sort_options(), |s| {
                s.as_str().to_owned()
            })?;
        }
        OptionsKind::OrderStatus => {
            write_options(&mut out, &order_status_options(), |s| {
                selection_key(s, |status| status.code().to_owned())
            })?;
        }
        OptionsKind::RegistrationStatus => {
            write_options(&mut out, &registration_status_options(), |s| {
                selection_key(s, |status| status.code().to_owned())
            })?;
        }
        OptionsKind::Category => {
            let records = load_records(config)?;
            write_options(&mut out, &category_options(&records.products), |s| {
                selection_key(s, Clone::clone)
            })?;
        }
    }
    Ok(())
}

fn selection_key<T>(selection: &Selection<T>, key: impl FnOnce(&T) -> String) -> String {
    match selection {
        Selection::All => "all".to_owned(),
        Selection::Only(value) => key(value),
    }
}

fn write_options<T: PartialEq>(
    out: &mut impl Write,
    options: &SelectOptions<T>,
    key: impl Fn(&T) -> String,
) -> io::Result<()> {
    for option in options.options() {
        let marker = if options.is_selected(&option.value) { "*" } else { " " };
        writeln!(out, "{marker} {}\t{}", key(&option.value), option.label)?;
    }
    Ok(())
}

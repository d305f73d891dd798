//! Tradewear CLI - Browse the catalog and manage the cart from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Search products, cheapest first
//! tw products -q coat --sort price-asc
//!
//! # Orders waiting on the seller
//! tw orders --status reserved
//!
//! # Put two units of a product in the cart
//! tw cart add p3 -n 2
//!
//! # Show the cart
//! tw cart show
//! ```
//!
//! # Commands
//!
//! - `products`, `orders`, `registrations` - Filtered, sorted record lists
//! - `cart` - Show and modify the persisted cart
//! - `options` - List the choices a selector offers

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tradewear_storefront::config::StorefrontConfig;
use tradewear_storefront::error::AppError;
use tradewear_storefront::telemetry;

mod commands;

use commands::options::OptionsKind;

#[derive(Parser)]
#[command(name = "tw")]
#[command(author, version, about = "Tradewear marketplace tools")]
struct Cli {
    /// Catalog JSON document (overrides `TRADEWEAR_CATALOG_PATH`)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Directory holding the cart slot (overrides `TRADEWEAR_DATA_DIR`)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Print captured log entries to stderr before exiting
    #[arg(long, global = true)]
    debug_log: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products
    Products {
        /// Text matched against product titles
        #[arg(short, long, default_value = "")]
        query: String,

        /// Only this category (`전체` or `all` for every category)
        #[arg(long)]
        category: Option<String>,

        /// Only this seller ID
        #[arg(long)]
        seller: Option<String>,

        /// Sort key (`price-asc`, `price-desc`, `newest`)
        #[arg(long)]
        sort: Option<String>,
    },
    /// List orders
    Orders {
        /// Text matched against order number, product, seller, and buyer
        #[arg(short, long, default_value = "")]
        query: String,

        /// Only this status (code or label)
        #[arg(long)]
        status: Option<String>,

        /// Sort key (`newest`, `oldest`, `total-asc`, `total-desc`)
        #[arg(long)]
        sort: Option<String>,
    },
    /// List seller registration requests
    Registrations {
        /// Text matched against email and phone
        #[arg(short, long, default_value = "")]
        query: String,

        /// Only this status (code or label)
        #[arg(long)]
        status: Option<String>,

        /// Sort key (`newest`, `oldest`)
        #[arg(long)]
        sort: Option<String>,
    },
    /// Show or modify the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// List the choices of a selector
    Options {
        #[arg(value_enum)]
        kind: OptionsKind,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Print cart lines and totals
    Show,
    /// Add a product to the cart
    Add {
        /// Product ID
        product_id: String,

        /// Units to add
        #[arg(short = 'n', long, default_value_t = 1)]
        quantity: u32,

        /// Empty a cart holding another seller's products instead of refusing
        #[arg(long)]
        replace: bool,
    },
    /// Remove a product line
    Remove {
        /// Product ID
        product_id: String,
    },
    /// Empty the cart
    Clear,
    /// Print the total number of units
    Count,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match StorefrontConfig::from_env() {
        Ok(config) => apply_overrides(config, &cli),
        Err(e) => {
            let _ = telemetry::init_tracing(&StorefrontConfig::default().log, false);
            AppError::from(e).report();
            return ExitCode::FAILURE;
        }
    };

    let sentry_guard = telemetry::init_sentry(&config);
    let capture = telemetry::init_tracing(&config.log, sentry_guard.is_some())
        .ok()
        .flatten();
    tracing::debug!(
        data_dir = %config.data_dir.display(),
        slot = %config.cart_slot,
        "Configuration loaded"
    );

    let result = run(cli.command, &config);
    if let Err(e) = &result {
        e.report();
    }

    if cli.debug_log
        && let Some(capture) = &capture
    {
        let _ = commands::print_log(capture);
    }

    if result.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn apply_overrides(mut config: StorefrontConfig, cli: &Cli) -> StorefrontConfig {
    if let Some(catalog) = &cli.catalog {
        config.catalog_path = Some(catalog.clone());
    }
    if let Some(data_dir) = &cli.data_dir {
        config.data_dir.clone_from(data_dir);
    }
    config
}

fn run(command: Commands, config: &StorefrontConfig) -> Result<(), AppError> {
    match command {
        Commands::Products {
            query,
            category,
            seller,
            sort,
        } => {
            let mut params = Vec::new();
            if let Some(category) = category.as_deref() {
                params.push(("category", category));
            }
            if let Some(seller) = seller.as_deref() {
                params.push(("seller", seller));
            }
            commands::catalog::products(config, &query, &params, sort.as_deref())
        }
        Commands::Orders {
            query,
            status,
            sort,
        } => commands::catalog::orders(config, &query, status.as_deref(), sort.as_deref()),
        Commands::Registrations {
            query,
            status,
            sort,
        } => {
            commands::catalog::registrations(config, &query, status.as_deref(), sort.as_deref())
        }
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(config),
            CartAction::Add {
                product_id,
                quantity,
                replace,
            } => commands::cart::add(config, &product_id, quantity, replace),
            CartAction::Remove { product_id } => commands::cart::remove(config, &product_id),
            CartAction::Clear => commands::cart::clear(config),
            CartAction::Count => commands::cart::count(config),
        },
        Commands::Options { kind } => commands::options::list(config, kind),
    }
}

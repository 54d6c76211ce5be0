//! Threadloom CLI - catalog browsing and stock management tools.
//!
//! # Usage
//!
//! ```bash
//! # Browse the shop listing with filters
//! tl-cli shop --style casual --color Black --size M --max-price 100
//!
//! # Show a product detail page
//! tl-cli product gradient-graphic-t-shirt
//!
//! # Manage the local cart
//! tl-cli cart add gradient-graphic-t-shirt --quantity 2
//! tl-cli cart list
//! tl-cli cart clear
//!
//! # Stock management
//! tl-cli admin list --stock out-of-stock
//! tl-cli admin set-quantity 3 25
//! tl-cli admin summary
//! ```
//!
//! # Commands
//!
//! - `shop` - Filtered, paginated catalog listing
//! - `product` - Product detail by slug
//! - `cart` - Local cart file operations
//! - `admin` - Stock management over a working copy

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;

use threadloom_admin::StockFilter;
use threadloom_core::{DressStyle, GarmentType};
use threadloom_storefront::showcase::Showcase;

mod commands;

#[derive(Parser)]
#[command(name = "tl-cli")]
#[command(author, version, about = "Threadloom CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the catalog listing
    Shop {
        /// Dress style scope (`casual`, `formal`, `party`, `gym`)
        #[arg(long)]
        style: Option<DressStyle>,

        /// Color filter (case-insensitive)
        #[arg(long)]
        color: Option<String>,

        /// Size filter; repeat to match any of several sizes
        #[arg(long = "size")]
        sizes: Vec<String>,

        /// Garment type filter (`t-shirt`, `shorts`, `shirts`, `hoodie`, `jeans`)
        #[arg(long = "type")]
        garment: Option<GarmentType>,

        /// Inclusive maximum offer price
        #[arg(long)]
        max_price: Option<Decimal>,

        /// Re-sort the listing like a home-page showcase row
        #[arg(long, value_enum)]
        sort: Option<SortOrder>,

        /// Page number (clamped to the last page)
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Items per page (12, 24, or 48)
        #[arg(long)]
        page_size: Option<usize>,
    },
    /// Show a product detail page by slug
    Product {
        /// Product slug, e.g. `gradient-graphic-t-shirt`
        slug: String,
    },
    /// Manage the local cart file
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Stock management over a working copy of the catalog
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SortOrder {
    /// Newest catalog date first
    Newest,
    /// Nearly sold out first
    TopSelling,
}

impl From<SortOrder> for Showcase {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::Newest => Self::Newest,
            SortOrder::TopSelling => Self::TopSelling,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum StockArg {
    All,
    InStock,
    OutOfStock,
}

impl From<StockArg> for StockFilter {
    fn from(arg: StockArg) -> Self {
        match arg {
            StockArg::All => Self::All,
            StockArg::InStock => Self::InStock,
            StockArg::OutOfStock => Self::OutOfStock,
        }
    }
}

#[derive(Subcommand)]
enum CartAction {
    /// Add a product to the cart
    Add {
        /// Product slug
        slug: String,

        /// Variant color (defaults to the first declared color)
        #[arg(long)]
        color: Option<String>,

        /// Size (defaults to the first declared size)
        #[arg(long)]
        size: Option<String>,

        /// Quantity (floors at 1)
        #[arg(long, default_value_t = 1)]
        quantity: u32,
    },
    /// Print the cart contents
    List,
    /// Empty the cart
    Clear,
}

#[derive(Subcommand)]
enum AdminAction {
    /// List products, optionally restricted by stock level
    List {
        /// Stock filter (defaults to all)
        #[arg(long, value_enum)]
        stock: Option<StockArg>,
    },
    /// Overwrite a product's stock quantity
    SetQuantity {
        /// Product id
        id: i32,

        /// New stock quantity
        quantity: u32,
    },
    /// Delete a product from the working copy
    Delete {
        /// Product id
        id: i32,
    },
    /// Print dashboard counts
    Summary,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Shop {
            style,
            color,
            sizes,
            garment,
            max_price,
            sort,
            page,
            page_size,
        } => {
            commands::shop::run(commands::shop::ShopArgs {
                style,
                color,
                sizes,
                garment,
                max_price,
                sort: sort.map(Showcase::from),
                page,
                page_size,
            })?;
        }
        Commands::Product { slug } => commands::product::run(&slug)?,
        Commands::Cart { action } => match action {
            CartAction::Add {
                slug,
                color,
                size,
                quantity,
            } => commands::cart::add(&slug, color.as_deref(), size.as_deref(), quantity)?,
            CartAction::List => commands::cart::list()?,
            CartAction::Clear => commands::cart::clear()?,
        },
        Commands::Admin { action } => match action {
            AdminAction::List { stock } => {
                commands::admin::list(stock.map_or(StockFilter::All, Into::into))?;
            }
            AdminAction::SetQuantity { id, quantity } => {
                commands::admin::set_quantity(id, quantity)?;
            }
            AdminAction::Delete { id } => commands::admin::delete(id)?,
            AdminAction::Summary => commands::admin::summary()?,
        },
    }
    Ok(())
}

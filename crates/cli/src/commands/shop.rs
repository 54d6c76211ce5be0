//! Browse the shop listing with filters, sorting, and pagination.

use rust_decimal::Decimal;
use tracing::info;

use threadloom_core::{DressStyle, GarmentType, Product};
use threadloom_storefront::catalog::Catalog;
use threadloom_storefront::config::StorefrontConfig;
use threadloom_storefront::pagination::{PageSize, PageToken, page_tokens, paginate};
use threadloom_storefront::shop::ShopSession;
use threadloom_storefront::showcase::Showcase;
use threadloom_storefront::variants::primary_image;

/// Filter and pagination arguments for the `shop` subcommand.
pub struct ShopArgs {
    pub style: Option<DressStyle>,
    pub color: Option<String>,
    pub sizes: Vec<String>,
    pub garment: Option<GarmentType>,
    pub max_price: Option<Decimal>,
    pub sort: Option<Showcase>,
    pub page: usize,
    pub page_size: Option<usize>,
}

/// Print one page of the catalog listing.
///
/// # Errors
///
/// Returns an error if configuration or the catalog cannot be loaded,
/// or the requested page size is unsupported.
pub fn run(args: ShopArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let catalog = Catalog::load(&config.catalog_path)?;

    let page_size = match args.page_size {
        Some(items) => PageSize::from_items(items)
            .ok_or_else(|| format!("unsupported page size: {items}"))?,
        None => config.page_size,
    };

    let selected_color = args.color.clone();

    let mut session = ShopSession::new(catalog, args.style);
    session.set_color(args.color);
    session.set_garment(args.garment);
    session.set_sizes(args.sizes);
    session.set_max_price(args.max_price);
    session.set_page_size(page_size);
    session.set_page(args.page);

    if let Some(kind) = args.sort {
        print_sorted(&session, kind, page_size, args.page, selected_color.as_deref());
        return Ok(());
    }

    let page = session.page();
    info!(
        matching = page.matching_count,
        page = page.current_page,
        of = page.total_pages,
        "shop listing"
    );
    for product in &page.products {
        print_row(product, selected_color.as_deref());
    }
    info!("pages: {}", render_tokens(&page.tokens, page.current_page));

    Ok(())
}

/// Re-sorted listing for `--sort`: the showcase ordering applied to
/// the filtered result before windowing.
fn print_sorted(
    session: &ShopSession,
    kind: Showcase,
    page_size: PageSize,
    page: usize,
    selected_color: Option<&str>,
) {
    let mut matching = session.matching();
    match kind {
        Showcase::Newest => {
            matching.retain(|p| p.quantity > 0);
            matching.sort_by(|a, b| b.date.cmp(&a.date));
        }
        Showcase::TopSelling => {
            matching.retain(|p| p.quantity > 0 && p.quantity < 10);
            matching.sort_by_key(|p| p.quantity);
        }
    }

    let window = paginate(&matching, page_size, page);
    info!(
        matching = matching.len(),
        page = window.current_page,
        of = window.total_pages,
        "shop listing (sorted)"
    );
    for product in &window.items {
        print_row(product, selected_color);
    }
    let tokens = page_tokens(window.current_page, window.total_pages);
    info!("pages: {}", render_tokens(&tokens, window.current_page));
}

fn print_row(product: &Product, selected_color: Option<&str>) {
    info!(
        "  [{}] {} - {} ({}% off) - {} - stock {} - {}",
        product.id,
        product.name,
        product.offer_price,
        product.discount_percent(),
        product.stock_status(),
        product.quantity,
        row_image(product, selected_color)
    );
}

/// Card image for one listing row: the filtered color's first image
/// when a color filter is active, with the usual first-color fallback.
fn row_image<'a>(product: &'a Product, selected_color: Option<&str>) -> &'a str {
    primary_image(product, selected_color).unwrap_or("(no image)")
}

fn render_tokens(tokens: &[PageToken], current: usize) -> String {
    let rendered: Vec<String> = tokens
        .iter()
        .map(|token| match token {
            PageToken::Number(n) if *n == current => format!("[{n}]"),
            PageToken::Number(n) => n.to_string(),
            PageToken::Ellipsis => "...".to_string(),
        })
        .collect();
    rendered.join(" ")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use threadloom_core::ProductId;

    #[test]
    fn test_row_image_follows_color_filter() {
        let mut images = BTreeMap::new();
        images.insert("Black".to_string(), vec!["b1.jpg".to_string()]);
        images.insert("White".to_string(), vec!["w1.jpg".to_string()]);

        let product = Product {
            id: ProductId::new(1),
            name: "Tee".to_string(),
            description: String::new(),
            stars: 4.0,
            price: "50".parse().unwrap(),
            offer_price: "40".parse().unwrap(),
            garment: GarmentType::TShirt,
            dress_style: DressStyle::Casual,
            colors: vec!["Black".to_string(), "White".to_string()],
            sizes: vec!["M".to_string()],
            quantity: 5,
            images,
            reviews: Vec::new(),
            faq: Vec::new(),
            date: "2024-01-01".parse().unwrap(),
        };

        // An active color filter drives the row image; no filter falls
        // back to the first declared color.
        assert_eq!(row_image(&product, Some("White")), "w1.jpg");
        assert_eq!(row_image(&product, Some("white")), "w1.jpg");
        assert_eq!(row_image(&product, None), "b1.jpg");

        let mut bare = product;
        bare.images.clear();
        assert_eq!(row_image(&bare, Some("White")), "(no image)");
    }

    #[test]
    fn test_render_tokens_marks_current_page() {
        let tokens = vec![
            PageToken::Number(1),
            PageToken::Ellipsis,
            PageToken::Number(4),
            PageToken::Number(5),
            PageToken::Number(6),
            PageToken::Ellipsis,
            PageToken::Number(10),
        ];
        assert_eq!(render_tokens(&tokens, 5), "1 ... 4 [5] 6 ... 10");
    }
}

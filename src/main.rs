use clap::Parser;
use shopcart::config::cli::{CliConfig, Command};
use shopcart::domain::ports::{Catalog, ConfigProvider};
use shopcart::utils::{logger, validation::Validate};
use shopcart::{Cart, CartManager, FileCartStore, HttpCatalog, LogNotifier};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting shopcart CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let settings = cli.settings()?;

    // 驗證配置
    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let catalog = HttpCatalog::new(settings.api_base_url());
    let store = FileCartStore::new(settings.cart_dir().to_string());
    let mut manager = CartManager::new(catalog, store, LogNotifier);

    match cli.command {
        Command::Add { product_id } => {
            manager.add_product(product_id).await;
            print_cart(manager.cart());
        }
        Command::Remove { product_id } => {
            manager.remove_product(product_id);
            print_cart(manager.cart());
        }
        Command::Set { product_id, amount } => {
            manager.update_product_amount(product_id, amount).await;
            print_cart(manager.cart());
        }
        Command::Show => print_cart(manager.cart()),
        Command::List => {
            let catalog = HttpCatalog::new(settings.api_base_url());
            let products = catalog.products().await?;
            println!("🛍  Catalog ({} products)", products.len());
            for product in products {
                println!(
                    "  #{} {} @ {:.2} (in cart: {})",
                    product.id,
                    product.title,
                    product.price,
                    manager.cart().amount_of(product.id)
                );
            }
        }
    }

    tracing::info!("✅ Done");
    Ok(())
}

fn print_cart(cart: &Cart) {
    if cart.is_empty() {
        println!("🛒 Cart is empty");
        return;
    }

    println!("🛒 Cart ({} lines)", cart.len());
    for line in cart.lines() {
        println!(
            "  {} x #{} {} @ {:.2} = {:.2}",
            line.amount,
            line.id(),
            line.product.title,
            line.product.price,
            line.line_total()
        );
    }
    println!("  Total: {:.2}", cart.total());
}

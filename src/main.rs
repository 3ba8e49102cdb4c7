use anyhow::Context;
use brew_cart::config::menu_file::DEFAULT_SHOP_NAME;
use brew_cart::utils::error::ErrorSeverity;
use brew_cart::utils::{logger, validation::Validate};
use brew_cart::{CliConfig, InMemoryCatalog, InteractionLoop, MenuFile, OrderSession, ShopError};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting brew-cart");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    let (shop_name, catalog) = match load_menu(config.menu.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => exit_with(&e),
    };

    let session = OrderSession::with_max_quantity(&catalog, config.max_quantity);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut repl = InteractionLoop::new(session, stdin.lock(), stdout.lock());

    let summary = repl
        .start(&shop_name, config.name.clone())
        .context("interactive session failed")?;

    tracing::info!(
        orders = summary.orders,
        revenue = %summary.revenue,
        "brew-cart finished"
    );
    Ok(())
}

fn load_menu(path: Option<&str>) -> brew_cart::Result<(String, InMemoryCatalog)> {
    let Some(path) = path else {
        return Ok((DEFAULT_SHOP_NAME.to_string(), InMemoryCatalog::default()));
    };

    tracing::info!("Loading menu from: {}", path);
    let menu = MenuFile::from_file(path).map_err(|e| match e {
        ShopError::Io(io) => ShopError::InvalidConfigValue {
            field: "menu".to_string(),
            value: path.to_string(),
            reason: io.to_string(),
        },
        other => other,
    })?;
    menu.validate()?;
    tracing::info!(items = menu.items.len(), "Menu loaded");

    Ok((menu.shop_name().to_string(), menu.into_catalog()))
}

fn exit_with(e: &ShopError) -> ! {
    tracing::error!(
        "Startup failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("{}", e.user_friendly_message());
    eprintln!("Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::Medium | ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

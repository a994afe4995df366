use std::sync::Arc;

use clap::Parser;

use go_restaurant_rs::cli::{Cli, Command};
use go_restaurant_rs::config::Config;
use go_restaurant_rs::error::Result;
use go_restaurant_rs::gateway::{FoodGateway, HttpGateway};
use go_restaurant_rs::interface::{display_extras, display_food, display_total, run_order_screen};
use go_restaurant_rs::logging;
use go_restaurant_rs::models::RouteParams;
use go_restaurant_rs::state::{ExtraSelection, OrderState, apply_selection};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    logging::init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_settings(&cli.settings)?;
    let gateway: Arc<dyn FoodGateway> = Arc::new(HttpGateway::new(&config.api_url, config.timeout)?);

    match cli.command {
        Command::Order { id } => run_order_screen(gateway, &config, RouteParams { id }).await,
        Command::Show { id } => cmd_show(gateway.as_ref(), &config, id).await,
        Command::Quote {
            id,
            quantity,
            extras,
            submit,
        } => cmd_quote(gateway.as_ref(), &config, id, quantity, &extras, submit).await,
    }
}

/// Print a food's details and its extras.
async fn cmd_show(gateway: &dyn FoodGateway, config: &Config, id: i64) -> Result<()> {
    let mut state = OrderState::new(config.locale);
    state.load(gateway.fetch_food(id).await?);

    display_food(&state);
    display_extras(&state);
    println!();

    Ok(())
}

/// Compute a total from command-line selections, optionally placing the order.
async fn cmd_quote(
    gateway: &dyn FoodGateway,
    config: &Config,
    id: i64,
    quantity: u32,
    raw_extras: &[String],
    submit: bool,
) -> Result<()> {
    let selections = raw_extras
        .iter()
        .map(|raw| ExtraSelection::parse(raw))
        .collect::<Result<Vec<_>>>()?;

    let mut state = OrderState::new(config.locale);
    state.load(gateway.fetch_food(id).await?);
    apply_selection(&mut state, quantity, &selections)?;

    display_food(&state);
    display_extras(&state);
    display_total(&state);

    if submit {
        gateway.create_order(&state.order_draft()).await?;
        println!("Order placed.");
    }

    Ok(())
}

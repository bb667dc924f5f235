//! Demo binary: seeds a small counter and walks one order through each lane.

use coffeeshop::config::CounterConfig;
use coffeeshop::lifecycle::{setup_tracing, CounterSystem};
use coffeeshop::model::{Category, MenuItemCreate, OrderLine, Role, UserCreate};
use std::error::Error;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // A missing .env is fine; the environment and built-in defaults still apply.
    dotenvy::dotenv().ok();
    setup_tracing();

    let config = CounterConfig::from_env().with_kitchen_capacity(1);
    info!(?config, "Starting demo counter");
    let system = CounterSystem::with_config(config);

    let alice = system
        .catalog_client
        .register_user(UserCreate::member("Alice", "alice@example.com"))
        .await?;
    let bob = system
        .catalog_client
        .register_user(UserCreate::member("Bob", "bob@example.com"))
        .await?;
    system
        .catalog_client
        .register_user(UserCreate::member("Admin", "admin@example.com").with_role(Role::Admin))
        .await?;

    let latte = system
        .catalog_client
        .add_menu_item(MenuItemCreate::new("Latte", 10_000, 5, Category::Drinks))
        .await?;
    let croissant = system
        .catalog_client
        .add_menu_item(MenuItemCreate::new("Croissant", 15_000, 3, Category::Foods))
        .await?;

    for user in [alice, bob] {
        let record = system.balance_client.create_top_up(user, 50_000).await?;
        let balance = system.balance_client.complete_top_up(record).await?;
        info!(%user, balance, "Topped up");
    }

    let span = tracing::info_span!("order_processing");
    async {
        let first = system
            .order_client
            .create_order(alice, vec![OrderLine::new(latte, 2)])
            .await?;
        info!(order_id = %first.order_id, status = %first.status, "Order placed");

        let second = system
            .order_client
            .create_order(bob, vec![OrderLine::new(croissant, 1), OrderLine::new(latte, 1)])
            .await?;
        info!(
            order_id = %second.order_id,
            status = %second.status,
            position = ?second.waiting_position,
            "Order placed"
        );

        // Only one slot in the kitchen, so this one is queued and can be cancelled.
        let third = system
            .order_client
            .create_order(bob, vec![OrderLine::new(croissant, 1)])
            .await?;
        let cancellation = system.order_client.cancel_order(third.order_id).await?;
        info!(order_id = %cancellation.order_id, refund = cancellation.refund, "Order cancelled");

        let completion = system.order_client.complete_order(first.order_id).await?;
        info!(order_id = %completion.order_id, promoted = ?completion.promoted, "Order completed");

        match system
            .order_client
            .create_order(alice, vec![OrderLine::new(latte, 10)])
            .await
        {
            Ok(receipt) => info!(order_id = %receipt.order_id, "Unexpectedly accepted"),
            Err(e) => error!(error = %e, "Order rejected"),
        }
        Ok::<_, coffeeshop::CounterError>(())
    }
    .instrument(span)
    .await?;

    for spender in system.report_client.top_spenders(3).await? {
        info!(rank = spender.rank, name = %spender.name, total = spender.total_spent, "Top spender");
    }

    system.shutdown().await?;
    info!("Demo completed successfully");
    Ok(())
}

use coffeeshop::clock::ManualClock;
use coffeeshop::config::CounterConfig;
use coffeeshop::lifecycle::CounterSystem;
use coffeeshop::model::{Category, MenuItemCreate, OrderLine, OrderStatus, UserCreate};
use std::sync::Arc;

fn start() -> CounterSystem {
    CounterSystem::with_clock(
        CounterConfig::default().with_kitchen_capacity(3),
        Arc::new(ManualClock::default()),
    )
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_orders_never_oversell_stock() {
    let system = start();
    let croissant = system
        .catalog_client
        .add_menu_item(MenuItemCreate::new("Croissant", 1_000, 5, Category::Foods))
        .await
        .unwrap();

    let mut handles = vec![];
    for i in 0..20 {
        let user = system
            .catalog_client
            .register_user(UserCreate::member(format!("user{i}"), format!("user{i}@example.com")))
            .await
            .unwrap();
        let record = system.balance_client.create_top_up(user, 10_000).await.unwrap();
        system.balance_client.complete_top_up(record).await.unwrap();

        let orders = system.order_client.clone();
        handles.push(tokio::spawn(async move {
            orders
                .create_order(user, vec![OrderLine::new(croissant, 1)])
                .await
        }));
    }

    let mut accepted = 0;
    for handle in handles {
        if handle.await.unwrap().is_ok() {
            accepted += 1;
        }
    }

    assert_eq!(accepted, 5);
    assert_eq!(
        system.catalog_client.menu_item(croissant).await.unwrap().stock,
        0
    );

    let ledger = system.shutdown().await.unwrap();
    let in_process = ledger
        .orders()
        .iter()
        .filter(|o| o.status == OrderStatus::InProcess)
        .count();
    assert_eq!(in_process, 3);
    assert_eq!(ledger.orders().len(), 5);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_orders_never_overdraw_balance() {
    let system = start();
    let alice = system
        .catalog_client
        .register_user(UserCreate::member("alice", "alice@example.com"))
        .await
        .unwrap();
    let record = system.balance_client.create_top_up(alice, 30_000).await.unwrap();
    system.balance_client.complete_top_up(record).await.unwrap();
    let latte = system
        .catalog_client
        .add_menu_item(MenuItemCreate::new("Latte", 10_000, 100, Category::Drinks))
        .await
        .unwrap();

    let mut handles = vec![];
    for _ in 0..10 {
        let orders = system.order_client.clone();
        handles.push(tokio::spawn(async move {
            orders
                .create_order(alice, vec![OrderLine::new(latte, 1)])
                .await
        }));
    }

    let mut accepted = 0;
    for handle in handles {
        if handle.await.unwrap().is_ok() {
            accepted += 1;
        }
    }

    assert_eq!(accepted, 3);
    assert_eq!(system.catalog_client.user(alice).await.unwrap().balance, 0);
    assert_eq!(
        system.catalog_client.menu_item(latte).await.unwrap().stock,
        97
    );

    // Waiting positions are dense: 1, 2, ... in creation order.
    let waiting = system
        .report_client
        .orders(Some(OrderStatus::WaitingList))
        .await
        .unwrap();
    assert!(waiting.iter().enumerate().all(|(i, r)| r.rank == i + 1));
}

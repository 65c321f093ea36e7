use std::io::{self, BufRead};
use std::sync::Arc;

use anyhow::Context;

use relay_events::{Dispatcher, EventDispatcher};
use relay_orders::{
    CreateOrderUseCase, InMemoryOrderRepository, InMemoryPublisher, ListOrdersUseCase,
    OrderCreatedHandler, OrderInput, OrderSystemConfig,
};

/// Reads one JSON `OrderInput` per stdin line, creates each order and logs what
/// was published.
fn main() -> anyhow::Result<()> {
    relay_observability::init();

    let config = OrderSystemConfig::from_env();
    let publisher = Arc::new(InMemoryPublisher::new());
    let dispatcher = Arc::new(EventDispatcher::new());

    dispatcher
        .register(
            &config.event_name,
            Arc::new(OrderCreatedHandler::new(publisher.clone(), &config)),
        )
        .context("failed to register order created handler")?;

    let repository = Arc::new(InMemoryOrderRepository::new());
    let create = CreateOrderUseCase::new(repository.clone(), dispatcher.clone())
        .with_event_name(config.event_name.as_str());
    let list = ListOrdersUseCase::new(repository);

    tracing::info!(event = %config.event_name, exchange = %config.exchange, "reading orders from stdin");

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let input: OrderInput = match serde_json::from_str(&line) {
            Ok(input) => input,
            Err(err) => {
                tracing::warn!(error = %err, "skipping malformed order line");
                continue;
            }
        };

        if let Err(err) = create.execute(input) {
            tracing::warn!(error = %err, "order rejected");
        }
    }

    let orders = list.execute().context("failed to list orders")?;
    tracing::info!(
        orders = orders.len(),
        published = publisher.published().len(),
        "done"
    );
    println!("{}", serde_json::to_string_pretty(&orders)?);

    Ok(())
}

use uuid::Uuid;

use crate::domain::{Address, Customer, DomainError, Order, OrderItem, Product};
use crate::infrastructure::AppState;

const DEMO_CUSTOMER_ID: &str = "demo-customer";

/// Insert a demo customer, two products and one order.
///
/// Customer and products are only inserted once; each run adds a new order.
pub async fn seed_demo_data(state: &AppState) -> Result<(), DomainError> {
    // 1. Customer
    if state.customer_repo.find(DEMO_CUSTOMER_ID).await?.is_none() {
        let mut customer = Customer::new(DEMO_CUSTOMER_ID, "Demo Customer")?
            .with_address(Address::new("Main Street", 1, "12345-000", "Springfield")?);
        customer.activate()?;
        state.customer_repo.create(&customer).await?;
    }

    // 2. Products
    let products = vec![
        Product::new("demo-keyboard", "Mechanical Keyboard", 89.9)?,
        Product::new("demo-mouse", "Wireless Mouse", 25.0)?,
    ];

    for product in &products {
        if state.product_repo.find(product.id()).await?.is_none() {
            state.product_repo.create(product).await?;
        }
    }

    // 3. Order referencing them
    let items = products
        .iter()
        .enumerate()
        .map(|(i, p)| {
            OrderItem::new(
                Uuid::new_v4().to_string(),
                p.name(),
                p.price(),
                p.id(),
                i as i32 + 1,
            )
        })
        .collect::<Result<Vec<_>, _>>()?;

    let order = Order::new(Uuid::new_v4().to_string(), DEMO_CUSTOMER_ID, items)?;
    state.order_repo.create(&order).await?;

    tracing::info!(order_id = %order.id(), total = order.total(), "Demo order seeded");

    Ok(())
}

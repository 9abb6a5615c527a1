use serde::Serialize;

use super::DomainError;

/// A line of an order.
///
/// `name` and `price` are copied from the product when the order is placed,
/// so later catalogue changes do not rewrite historical orders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderItem {
    id: String,
    name: String,
    price: f64,
    product_id: String,
    quantity: i32,
}

impl OrderItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        product_id: impl Into<String>,
        quantity: i32,
    ) -> Result<Self, DomainError> {
        let item = Self {
            id: id.into(),
            name: name.into(),
            price,
            product_id: product_id.into(),
            quantity,
        };
        item.validate()?;
        Ok(item)
    }

    fn validate(&self) -> Result<(), DomainError> {
        if self.id.trim().is_empty() {
            return Err(DomainError::validation("Item id is required"));
        }
        if self.product_id.trim().is_empty() {
            return Err(DomainError::validation("Item product id is required"));
        }
        if self.quantity <= 0 {
            return Err(DomainError::validation(format!(
                "Item {} quantity must be greater than 0",
                self.id
            )));
        }
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Order aggregate: the order and the items it owns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    id: String,
    customer_id: String,
    items: Vec<OrderItem>,
}

impl Order {
    pub fn new(
        id: impl Into<String>,
        customer_id: impl Into<String>,
        items: Vec<OrderItem>,
    ) -> Result<Self, DomainError> {
        let order = Self {
            id: id.into(),
            customer_id: customer_id.into(),
            items,
        };
        order.validate()?;
        Ok(order)
    }

    fn validate(&self) -> Result<(), DomainError> {
        if self.id.trim().is_empty() {
            return Err(DomainError::validation("Order id is required"));
        }
        if self.customer_id.trim().is_empty() {
            return Err(DomainError::validation("Customer id is required"));
        }
        validate_items(&self.items)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    /// Sum of `price * quantity` over the current items.
    pub fn total(&self) -> f64 {
        self.items.iter().map(OrderItem::subtotal).sum()
    }

    pub fn change_customer(&mut self, customer_id: impl Into<String>) -> Result<(), DomainError> {
        let customer_id = customer_id.into();
        if customer_id.trim().is_empty() {
            return Err(DomainError::validation("Customer id is required"));
        }
        self.customer_id = customer_id;
        Ok(())
    }

    /// Replaces the whole item list. The previous items are left untouched on error.
    pub fn change_items(&mut self, items: Vec<OrderItem>) -> Result<(), DomainError> {
        validate_items(&items)?;
        self.items = items;
        Ok(())
    }
}

fn validate_items(items: &[OrderItem]) -> Result<(), DomainError> {
    if items.is_empty() {
        return Err(DomainError::validation("Order must have at least one item"));
    }
    if let Some(item) = items.iter().find(|i| i.quantity <= 0) {
        return Err(DomainError::validation(format!(
            "Item {} quantity must be greater than 0",
            item.id
        )));
    }
    Ok(())
}

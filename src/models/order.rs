use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, Order, OrderItem};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub customer_id: String,
    /// Sum of the item subtotals, written together with the items.
    /// Checked against the items again in [`OrderWithItems::into_order`].
    pub total: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::customer::Entity",
        from = "Column::CustomerId",
        to = "super::customer::Column::Id"
    )]
    Customer,
    #[sea_orm(has_many = "super::order_item::Entity")]
    Items,
}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl Related<super::order_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Items.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

const TOTAL_TOLERANCE: f64 = 1e-6;

/// Read projection of an order row with its item rows eagerly loaded.
///
/// Serializes as `{ id, customer_id, total, items: [{ id, name, price, quantity, order_id, product_id }] }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderWithItems {
    pub id: String,
    pub customer_id: String,
    pub total: f64,
    pub items: Vec<super::order_item::Model>,
}

impl OrderWithItems {
    pub fn new(order: Model, items: Vec<super::order_item::Model>) -> Self {
        Self {
            id: order.id,
            customer_id: order.customer_id,
            total: order.total,
            items,
        }
    }

    /// Rebuilds the domain aggregate.
    ///
    /// The entity derives its total from the items, so a stored total that
    /// no longer matches them (row edited outside the repository) is rejected.
    pub fn into_order(self) -> Result<Order, DomainError> {
        let items = self
            .items
            .into_iter()
            .map(|i| OrderItem::new(i.id, i.name, i.price, i.product_id, i.quantity))
            .collect::<Result<Vec<_>, _>>()?;

        let order = Order::new(self.id, self.customer_id, items)?;
        if (order.total() - self.total).abs() > TOTAL_TOLERANCE {
            return Err(DomainError::Validation(format!(
                "Order {} stored total {} does not match items total {}",
                order.id(),
                self.total,
                order.total()
            )));
        }

        Ok(order)
    }
}

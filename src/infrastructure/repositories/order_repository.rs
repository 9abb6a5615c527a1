//! SeaORM implementation of OrderRepository
//!
//! The order row and its item rows are always written in one transaction.
//! Updates replace the full item set instead of diffing it.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, LoaderTrait,
    ModelTrait, QueryFilter, Set, TransactionTrait,
};

use crate::domain::{DomainError, Order, OrderRepository};
use crate::models::order::{ActiveModel, Entity as OrderEntity, OrderWithItems};
use crate::models::order_item::{self, Entity as OrderItemEntity};

/// SeaORM-based implementation of OrderRepository
pub struct SeaOrmOrderRepository {
    db: DatabaseConnection,
}

impl SeaOrmOrderRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn item_rows(order: &Order) -> Vec<order_item::ActiveModel> {
    order
        .items()
        .iter()
        .map(|item| order_item::ActiveModel {
            id: Set(item.id().to_string()),
            name: Set(item.name().to_string()),
            price: Set(item.price()),
            quantity: Set(item.quantity()),
            order_id: Set(order.id().to_string()),
            product_id: Set(item.product_id().to_string()),
        })
        .collect()
}

async fn insert_items<C: ConnectionTrait>(db: &C, order: &Order) -> Result<(), DomainError> {
    let rows = item_rows(order);
    if rows.is_empty() {
        return Ok(());
    }

    OrderItemEntity::insert_many(rows)
        .exec_without_returning(db)
        .await?;

    Ok(())
}

async fn delete_items<C: ConnectionTrait>(db: &C, order_id: &str) -> Result<u64, DomainError> {
    let result = OrderItemEntity::delete_many()
        .filter(order_item::Column::OrderId.eq(order_id))
        .exec(db)
        .await?;

    Ok(result.rows_affected)
}

#[async_trait]
impl OrderRepository for SeaOrmOrderRepository {
    async fn create(&self, order: &Order) -> Result<(), DomainError> {
        let txn = self.db.begin().await?;

        let new_order = ActiveModel {
            id: Set(order.id().to_string()),
            customer_id: Set(order.customer_id().to_string()),
            total: Set(order.total()),
        };
        OrderEntity::insert(new_order)
            .exec_without_returning(&txn)
            .await?;

        insert_items(&txn, order).await?;

        txn.commit().await?;

        tracing::debug!(
            order_id = %order.id(),
            customer_id = %order.customer_id(),
            items = order.items().len(),
            total = order.total(),
            "Order created"
        );

        Ok(())
    }

    async fn update(&self, order: &Order) -> Result<(), DomainError> {
        let txn = self.db.begin().await?;

        let existing = OrderEntity::find_by_id(order.id())
            .one(&txn)
            .await?
            .ok_or_else(|| {
                tracing::warn!(order_id = %order.id(), "Update target not found");
                DomainError::NotFound
            })?;

        let mut active: ActiveModel = existing.into();
        active.customer_id = Set(order.customer_id().to_string());
        active.total = Set(order.total());
        active.update(&txn).await?;

        let removed = delete_items(&txn, order.id()).await?;
        insert_items(&txn, order).await?;

        txn.commit().await?;

        tracing::debug!(
            order_id = %order.id(),
            customer_id = %order.customer_id(),
            removed_items = removed,
            items = order.items().len(),
            total = order.total(),
            "Order updated"
        );

        Ok(())
    }

    async fn find(&self, id: &str) -> Result<Option<OrderWithItems>, DomainError> {
        let Some(order) = OrderEntity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let items = order.find_related(OrderItemEntity).all(&self.db).await?;

        Ok(Some(OrderWithItems::new(order, items)))
    }

    async fn find_all(&self) -> Result<Vec<OrderWithItems>, DomainError> {
        let orders = OrderEntity::find().all(&self.db).await?;
        let items = orders.load_many(OrderItemEntity, &self.db).await?;

        Ok(orders
            .into_iter()
            .zip(items)
            .map(|(order, items)| OrderWithItems::new(order, items))
            .collect())
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError> {
        let txn = self.db.begin().await?;

        delete_items(&txn, id).await?;
        let result = OrderEntity::delete_by_id(id).exec(&txn).await?;

        if result.rows_affected == 0 {
            tracing::warn!(order_id = %id, "Delete target not found");
            return Err(DomainError::NotFound);
        }

        txn.commit().await?;
        tracing::debug!(order_id = %id, "Order deleted");

        Ok(())
    }
}

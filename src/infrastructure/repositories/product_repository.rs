//! SeaORM implementation of ProductRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use crate::domain::{DomainError, Product, ProductRepository};
use crate::models::product::{ActiveModel, Entity as ProductEntity, Model};

/// SeaORM-based implementation of ProductRepository
pub struct SeaOrmProductRepository {
    db: DatabaseConnection,
}

impl SeaOrmProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_domain(model: Model) -> Result<Product, DomainError> {
    Product::new(model.id, model.name, model.price)
}

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn create(&self, product: &Product) -> Result<(), DomainError> {
        let new_product = ActiveModel {
            id: Set(product.id().to_string()),
            name: Set(product.name().to_string()),
            price: Set(product.price()),
        };

        new_product.insert(&self.db).await?;
        tracing::debug!(product_id = %product.id(), price = product.price(), "Product created");

        Ok(())
    }

    async fn update(&self, product: &Product) -> Result<(), DomainError> {
        let existing = ProductEntity::find_by_id(product.id())
            .one(&self.db)
            .await?
            .ok_or_else(|| {
                tracing::warn!(product_id = %product.id(), "Update target not found");
                DomainError::NotFound
            })?;

        let mut active: ActiveModel = existing.into();
        active.name = Set(product.name().to_string());
        active.price = Set(product.price());

        active.update(&self.db).await?;
        tracing::debug!(product_id = %product.id(), "Product updated");

        Ok(())
    }

    async fn find(&self, id: &str) -> Result<Option<Product>, DomainError> {
        ProductEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(to_domain)
            .transpose()
    }

    async fn find_all(&self) -> Result<Vec<Product>, DomainError> {
        ProductEntity::find()
            .all(&self.db)
            .await?
            .into_iter()
            .map(to_domain)
            .collect()
    }
}

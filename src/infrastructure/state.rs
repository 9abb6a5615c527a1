//! Application state containing repositories and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::{CustomerRepository, OrderRepository, ProductRepository};
use crate::infrastructure::{
    SeaOrmCustomerRepository, SeaOrmOrderRepository, SeaOrmProductRepository,
};

/// Repositories sharing one database connection
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    /// Customer repository
    pub customer_repo: Arc<dyn CustomerRepository>,
    /// Product repository
    pub product_repo: Arc<dyn ProductRepository>,
    /// Order repository
    pub order_repo: Arc<dyn OrderRepository>,
}

impl AppState {
    /// Create a new AppState with all repositories initialized
    pub fn new(db: DatabaseConnection) -> Self {
        let customer_repo = Arc::new(SeaOrmCustomerRepository::new(db.clone()));
        let product_repo = Arc::new(SeaOrmProductRepository::new(db.clone()));
        let order_repo = Arc::new(SeaOrmOrderRepository::new(db.clone()));

        Self {
            db,
            customer_repo,
            product_repo,
            order_repo,
        }
    }

    /// Open the database, create the schema and wire the repositories
    pub async fn connect(database_url: &str) -> Result<Self, sea_orm::DbErr> {
        let db = super::db::init_db(database_url).await?;
        Ok(Self::new(db))
    }

    /// Drop the repositories and close the underlying connection
    pub async fn shutdown(self) -> Result<(), sea_orm::DbErr> {
        let Self { db, .. } = self;
        super::db::close_db(db).await
    }
}

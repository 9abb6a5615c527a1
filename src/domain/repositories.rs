//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;

use super::{Customer, DomainError, Order, Product};
use crate::models::order::OrderWithItems;

/// Repository trait for Customer entity
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Insert a new customer. Fails if the id is already taken.
    async fn create(&self, customer: &Customer) -> Result<(), DomainError>;

    /// Overwrite name, address, status and reward points of an existing customer
    async fn update(&self, customer: &Customer) -> Result<(), DomainError>;

    /// Find a customer by ID
    async fn find(&self, id: &str) -> Result<Option<Customer>, DomainError>;

    /// Find all customers
    async fn find_all(&self) -> Result<Vec<Customer>, DomainError>;
}

/// Repository trait for Product entity
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a new product. Fails if the id is already taken.
    async fn create(&self, product: &Product) -> Result<(), DomainError>;

    /// Overwrite name and price of an existing product
    async fn update(&self, product: &Product) -> Result<(), DomainError>;

    /// Find a product by ID
    async fn find(&self, id: &str) -> Result<Option<Product>, DomainError>;

    /// Find all products
    async fn find_all(&self) -> Result<Vec<Product>, DomainError>;
}

/// Repository trait for the Order aggregate
///
/// Reads return the stored projection (order row plus its item rows);
/// use [`OrderWithItems::into_order`] to get the domain entity back.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Insert the order row and all its item rows atomically.
    /// The customer and every referenced product must already exist.
    async fn create(&self, order: &Order) -> Result<(), DomainError>;

    /// Store the current customer and total, and replace all item rows
    async fn update(&self, order: &Order) -> Result<(), DomainError>;

    /// Find an order with its items
    async fn find(&self, id: &str) -> Result<Option<OrderWithItems>, DomainError>;

    /// Find all orders with their items, in insertion order
    async fn find_all(&self) -> Result<Vec<OrderWithItems>, DomainError>;

    /// Delete an order and its items
    async fn delete(&self, id: &str) -> Result<(), DomainError>;
}

//! Domain layer - Checkout entities and persistence contracts
//!
//! Entities here enforce their own invariants. Repository traits describe
//! how they are stored; implementations live in the infrastructure layer.

pub mod customer;
pub mod errors;
pub mod order;
pub mod product;
pub mod repositories;

pub use customer::{Address, Customer};
pub use errors::DomainError;
pub use order::{Order, OrderItem};
pub use product::Product;
pub use repositories::*;

//! Repository implementations using SeaORM

pub mod customer_repository;
pub mod order_repository;
pub mod product_repository;

pub use customer_repository::SeaOrmCustomerRepository;
pub use order_repository::SeaOrmOrderRepository;
pub use product_repository::SeaOrmProductRepository;

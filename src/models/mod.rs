pub mod customer;
pub mod order;
pub mod order_item;
pub mod product;

pub use order::OrderWithItems;

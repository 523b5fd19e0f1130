pub mod customer_repo;
pub mod models;
pub mod order_repo;
pub mod product_repo;

pub use customer_repo::DieselCustomerRepository;
pub use order_repo::DieselOrderRepository;
pub use product_repo::DieselProductRepository;

#[cfg(test)]
pub(crate) mod test_db;

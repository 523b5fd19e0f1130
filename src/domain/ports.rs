use std::sync::Arc;

use super::catalog::{Customer, NewCustomer, NewProduct, Product};
use super::errors::DomainError;
use super::order::{NewOrder, OrderQuery, OrderView};

pub trait OrderRepository: Send + Sync + 'static {
    /// Persists the order and all of its line items as one unit and returns
    /// the new order id. On any failure nothing of the order is left behind.
    fn create(&self, order: NewOrder) -> Result<i64, DomainError>;
    fn list(&self, query: OrderQuery) -> Result<Vec<OrderView>, DomainError>;
}

pub trait CustomerRepository: Send + Sync + 'static {
    fn create(&self, customer: NewCustomer) -> Result<i32, DomainError>;
    fn list(&self) -> Result<Vec<Customer>, DomainError>;
    fn delete(&self, id: i32) -> Result<(), DomainError>;
    /// Case-insensitive name match, exact phone match.
    fn find_by_name_and_phone(&self, name: &str, phone: &str)
        -> Result<Option<Customer>, DomainError>;
}

pub trait ProductRepository: Send + Sync + 'static {
    fn create(&self, product: NewProduct) -> Result<i32, DomainError>;
    fn list(&self) -> Result<Vec<Product>, DomainError>;
    fn delete(&self, id: i32) -> Result<(), DomainError>;
}

pub trait CredentialVerifier: Send + Sync + 'static {
    fn verify(&self, login: &str, password: &str) -> bool;
}

impl<T: OrderRepository + ?Sized> OrderRepository for Arc<T> {
    fn create(&self, order: NewOrder) -> Result<i64, DomainError> {
        (**self).create(order)
    }

    fn list(&self, query: OrderQuery) -> Result<Vec<OrderView>, DomainError> {
        (**self).list(query)
    }
}

impl<T: CustomerRepository + ?Sized> CustomerRepository for Arc<T> {
    fn create(&self, customer: NewCustomer) -> Result<i32, DomainError> {
        (**self).create(customer)
    }

    fn list(&self) -> Result<Vec<Customer>, DomainError> {
        (**self).list()
    }

    fn delete(&self, id: i32) -> Result<(), DomainError> {
        (**self).delete(id)
    }

    fn find_by_name_and_phone(
        &self,
        name: &str,
        phone: &str,
    ) -> Result<Option<Customer>, DomainError> {
        (**self).find_by_name_and_phone(name, phone)
    }
}

impl<T: ProductRepository + ?Sized> ProductRepository for Arc<T> {
    fn create(&self, product: NewProduct) -> Result<i32, DomainError> {
        (**self).create(product)
    }

    fn list(&self) -> Result<Vec<Product>, DomainError> {
        (**self).list()
    }

    fn delete(&self, id: i32) -> Result<(), DomainError> {
        (**self).delete(id)
    }
}

use crate::domain::catalog::{Customer, NewCustomer, NewProduct, Product};
use crate::domain::errors::DomainError;
use crate::domain::ports::{CustomerRepository, ProductRepository};

pub struct CustomerService<C> {
    repo: C,
}

impl<C: CustomerRepository> CustomerService<C> {
    pub fn new(repo: C) -> Self {
        Self { repo }
    }

    pub fn register(&self, customer: NewCustomer) -> Result<i32, DomainError> {
        self.repo.create(customer.validated()?)
    }

    pub fn list(&self) -> Result<Vec<Customer>, DomainError> {
        self.repo.list()
    }

    pub fn remove(&self, id: i32) -> Result<(), DomainError> {
        self.repo.delete(id)
    }

    /// Looks a returning customer up by name and phone.
    pub fn identify(&self, name: &str, phone: &str) -> Result<Customer, DomainError> {
        self.repo
            .find_by_name_and_phone(name.trim(), phone.trim())?
            .ok_or(DomainError::NotFound)
    }
}

pub struct ProductService<P> {
    repo: P,
}

impl<P: ProductRepository> ProductService<P> {
    pub fn new(repo: P) -> Self {
        Self { repo }
    }

    pub fn add(&self, product: NewProduct) -> Result<i32, DomainError> {
        self.repo.create(product.validated()?)
    }

    pub fn list(&self) -> Result<Vec<Product>, DomainError> {
        self.repo.list()
    }

    pub fn remove(&self, id: i32) -> Result<(), DomainError> {
        self.repo.delete(id)
    }
}

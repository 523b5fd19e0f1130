use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::catalog::{Customer, NewCustomer};
use crate::domain::errors::DomainError;
use crate::domain::ports::CustomerRepository;
use crate::schema::customers;

use super::models::{CustomerRow, NewCustomerRow};

#[derive(Clone)]
pub struct DieselCustomerRepository {
    pool: DbPool,
}

impl DieselCustomerRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl CustomerRepository for DieselCustomerRepository {
    fn create(&self, customer: NewCustomer) -> Result<i32, DomainError> {
        let mut conn = self.pool.get()?;
        let id = diesel::insert_into(customers::table)
            .values(&NewCustomerRow {
                name: customer.name,
                phone: customer.phone,
                address: customer.address,
            })
            .returning(customers::id)
            .get_result(&mut conn)?;
        Ok(id)
    }

    fn list(&self) -> Result<Vec<Customer>, DomainError> {
        let mut conn = self.pool.get()?;
        let rows = customers::table
            .order(customers::id.asc())
            .select(CustomerRow::as_select())
            .load(&mut conn)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn delete(&self, id: i32) -> Result<(), DomainError> {
        let mut conn = self.pool.get()?;
        let deleted = diesel::delete(customers::table.find(id)).execute(&mut conn)?;
        if deleted == 0 {
            return Err(DomainError::NotFound);
        }
        Ok(())
    }

    fn find_by_name_and_phone(
        &self,
        name: &str,
        phone: &str,
    ) -> Result<Option<Customer>, DomainError> {
        let mut conn = self.pool.get()?;
        // Phone narrows it down in SQL; the name comparison ignores case.
        let candidates = customers::table
            .filter(customers::phone.eq(phone))
            .order(customers::id.asc())
            .select(CustomerRow::as_select())
            .load(&mut conn)?;
        let wanted = name.to_lowercase();
        Ok(candidates
            .into_iter()
            .find(|c| c.name.to_lowercase() == wanted)
            .map(Into::into))
    }
}

use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::catalog::{NewProduct, Product};
use crate::domain::errors::DomainError;
use crate::domain::ports::ProductRepository;
use crate::schema::products;

use super::models::{NewProductRow, ProductRow};

#[derive(Clone)]
pub struct DieselProductRepository {
    pool: DbPool,
}

impl DieselProductRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl ProductRepository for DieselProductRepository {
    fn create(&self, product: NewProduct) -> Result<i32, DomainError> {
        let mut conn = self.pool.get()?;
        let id = diesel::insert_into(products::table)
            .values(&NewProductRow {
                name: product.name,
                price: product.price,
                category: product.category,
            })
            .returning(products::id)
            .get_result(&mut conn)?;
        Ok(id)
    }

    fn list(&self) -> Result<Vec<Product>, DomainError> {
        let mut conn = self.pool.get()?;
        let rows = products::table
            .order(products::id.asc())
            .select(ProductRow::as_select())
            .load(&mut conn)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn delete(&self, id: i32) -> Result<(), DomainError> {
        let mut conn = self.pool.get()?;
        let deleted = diesel::delete(products::table.find(id)).execute(&mut conn)?;
        if deleted == 0 {
            return Err(DomainError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use bigdecimal::BigDecimal;

    use super::DieselProductRepository;
    use crate::domain::catalog::NewProduct;
    use crate::domain::ports::ProductRepository;
    use crate::infrastructure::test_db::setup_db;

    #[tokio::test]
    #[ignore = "requires a Docker daemon for the Postgres testcontainer"]
    async fn products_roundtrip_with_exact_prices() {
        let (_container, pool) = setup_db().await;
        let repo = DieselProductRepository::new(pool);

        let id = repo
            .create(NewProduct {
                name: "Chocolate com morango".to_string(),
                price: BigDecimal::from_str("45.90").unwrap(),
                category: "pizzaDoce".to_string(),
            })
            .expect("create failed");

        let products = repo.list().expect("list failed");
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, id);
        assert_eq!(products[0].price, BigDecimal::from_str("45.90").unwrap());

        repo.delete(id).expect("delete failed");
        assert!(repo.list().expect("list failed").is_empty());
    }
}

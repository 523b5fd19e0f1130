use bigdecimal::BigDecimal;

use super::errors::DomainError;
use super::money::{check_precision, to_non_negative_cents, PRICE_PRECISION};

/// Column widths of the `VARCHAR` fields, in characters.
pub const NAME_MAX_CHARS: usize = 150;
pub const PHONE_MAX_CHARS: usize = 50;
pub const ADDRESS_MAX_CHARS: usize = 250;
pub const CATEGORY_MAX_CHARS: usize = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub address: String,
}

#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub name: String,
    pub phone: String,
    pub address: String,
}

impl NewCustomer {
    /// Trims every field and checks that name and phone are present.
    pub fn validated(self) -> Result<Self, DomainError> {
        let name = at_most("nome", required("nome", &self.name)?, NAME_MAX_CHARS)?;
        let phone = at_most("telefone", required("telefone", &self.phone)?, PHONE_MAX_CHARS)?;
        let address = at_most("endereco", self.address.trim().to_string(), ADDRESS_MAX_CHARS)?;
        Ok(Self {
            name,
            phone,
            address,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: BigDecimal,
    pub category: String,
}

#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub price: BigDecimal,
    pub category: String,
}

impl NewProduct {
    pub fn validated(self) -> Result<Self, DomainError> {
        let price = to_non_negative_cents("preco", &self.price)?;
        check_precision("preco", &price, PRICE_PRECISION)?;
        Ok(Self {
            name: at_most("nome", required("nome", &self.name)?, NAME_MAX_CHARS)?,
            price,
            category: at_most("tipo", required("tipo", &self.category)?, CATEGORY_MAX_CHARS)?,
        })
    }
}

pub(crate) fn required(field: &str, value: &str) -> Result<String, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidInput(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}

pub(crate) fn at_most(field: &str, value: String, max_chars: usize) -> Result<String, DomainError> {
    let len = value.chars().count();
    if len > max_chars {
        return Err(DomainError::InvalidInput(format!(
            "{field} must be at most {max_chars} characters, got {len}"
        )));
    }
    Ok(value)
}

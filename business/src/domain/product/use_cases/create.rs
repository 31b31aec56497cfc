use async_trait::async_trait;

use crate::domain::errors::TransportError;
use crate::domain::product::model::Product;

/// Fields submitted when creating a product. The server assigns the rest.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateProductParams {
    pub name: String,
    pub price: f64,
    pub stock: u32,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, TransportError>;
}

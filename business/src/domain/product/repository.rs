use async_trait::async_trait;

use crate::domain::errors::TransportError;

use super::model::Product;
use super::page::PaginatedResult;
use super::use_cases::create::CreateProductParams;
use super::value_objects::ProductId;

/// Port to the remote product store.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_page(&self, page: u32) -> Result<PaginatedResult, TransportError>;
    async fn create(&self, params: &CreateProductParams) -> Result<Product, TransportError>;
    async fn delete(&self, id: ProductId) -> Result<(), TransportError>;
}

use async_trait::async_trait;

use crate::domain::errors::TransportError;
use crate::domain::product::page::PaginatedResult;

pub struct FetchPageParams {
    pub page: u32,
}

#[async_trait]
pub trait FetchPageUseCase: Send + Sync {
    async fn execute(&self, params: FetchPageParams) -> Result<PaginatedResult, TransportError>;
}

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::TransportError;
use crate::domain::logger::Logger;
use crate::domain::product::page::PaginatedResult;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::fetch_page::{FetchPageParams, FetchPageUseCase};

pub struct FetchPageUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl FetchPageUseCase for FetchPageUseCaseImpl {
    async fn execute(&self, params: FetchPageParams) -> Result<PaginatedResult, TransportError> {
        self.logger
            .info(&format!("Fetching products page {}", params.page));
        let result = self.repository.get_page(params.page).await?;
        self.logger.info(&format!(
            "Found {} products on page {} of {}",
            result.items.len(),
            result.info.page,
            result.info.last_page
        ));
        Ok(result)
    }
}

use async_trait::async_trait;
use tokio::sync::broadcast;

use crate::domain::product::errors::MutationError;
use crate::domain::product::events::ListEvent;
use crate::domain::product::list_state::{ListSnapshot, LoadOutcome};
use crate::domain::product::model::Product;
use crate::domain::product::services::ProductForm;
use crate::domain::product::value_objects::ProductId;

/// Paginated view over the remote product collection.
#[async_trait]
pub trait ProductListUseCase: Send + Sync {
    async fn load_page(&self, page: u32) -> LoadOutcome;
    async fn reload(&self) -> LoadOutcome;
    async fn create(&self, form: &dyn ProductForm) -> Result<Product, MutationError>;
    async fn delete(&self, id: ProductId) -> Result<(), MutationError>;
    /// `None` when already on the last known page.
    async fn next_page(&self) -> Option<LoadOutcome>;
    /// `None` when already on the first page.
    async fn prev_page(&self) -> Option<LoadOutcome>;
    async fn go_to_page(&self, page: u32) -> LoadOutcome;
    async fn visible_page_window(&self) -> Vec<u32>;
    async fn snapshot(&self) -> ListSnapshot;
    fn subscribe(&self) -> broadcast::Receiver<ListEvent>;
}

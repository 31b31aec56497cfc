use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, broadcast};

use crate::domain::logger::Logger;
use crate::domain::product::errors::MutationError;
use crate::domain::product::events::ListEvent;
use crate::domain::product::list_state::{ListConfig, ListSnapshot, ListState, LoadOutcome};
use crate::domain::product::model::Product;
use crate::domain::product::page::{PageInfo, visible_page_window};
use crate::domain::product::services::{MutationNotifier, ProductForm};
use crate::domain::product::use_cases::create::CreateProductUseCase;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use crate::domain::product::use_cases::fetch_page::{FetchPageParams, FetchPageUseCase};
use crate::domain::product::use_cases::manage_list::ProductListUseCase;
use crate::domain::product::value_objects::{MutationKind, ProductId};

/// Keeps the displayed product page in sync with the remote store.
///
/// Every state change goes through `load_page`;
/// mutations only ever trigger a reload. Loads are ticketed so that a response
/// overtaken by a newer request is dropped instead of overwriting fresher state.
pub struct ProductListCoordinator {
    fetch_page: Arc<dyn FetchPageUseCase>,
    create_product: Arc<dyn CreateProductUseCase>,
    delete_product: Arc<dyn DeleteProductUseCase>,
    notifier: Arc<dyn MutationNotifier>,
    logger: Arc<dyn Logger>,
    config: ListConfig,
    state: Mutex<ListState>,
    events: broadcast::Sender<ListEvent>,
}

impl ProductListCoordinator {
    pub fn new(
        fetch_page: Arc<dyn FetchPageUseCase>,
        create_product: Arc<dyn CreateProductUseCase>,
        delete_product: Arc<dyn DeleteProductUseCase>,
        notifier: Arc<dyn MutationNotifier>,
        logger: Arc<dyn Logger>,
        config: ListConfig,
    ) -> Self {
        let (events, _) = broadcast::channel(config.event_capacity.max(1));
        Self {
            fetch_page,
            create_product,
            delete_product,
            notifier,
            logger,
            config,
            state: Mutex::new(ListState::new()),
            events,
        }
    }

    fn publish(&self, event: ListEvent) {
        // Having no subscriber is fine.
        let _ = self.events.send(event);
    }

    async fn set_mutating(&self, value: bool) {
        self.state.lock().await.is_mutating = value;
        self.publish(ListEvent::MutatingChanged(value));
    }

    /// Loads the previous page after a reload of `info.page` came back empty.
    async fn step_back_from_empty(&self, info: PageInfo) {
        if !self.config.step_back_on_empty_page || info.page <= 1 {
            return;
        }

        self.logger.info(&format!(
            "Page {} is empty after delete, stepping back to page {}",
            info.page,
            info.page - 1
        ));
        self.load_page(info.page - 1).await;
    }

    /// Runs a ticketed load and returns the outcome with the number of items
    /// it applied, counted under the same lock that applied them.
    async fn load_counted(&self, page: u32) -> (LoadOutcome, usize) {
        if page == 0 {
            self.logger.warn("Ignoring request for page 0, pages start at 1");
            return (LoadOutcome::Rejected, 0);
        }

        let ticket = self.state.lock().await.begin_load(page);
        self.publish(ListEvent::PageRequested { page });

        let result = self.fetch_page.execute(FetchPageParams { page }).await;

        let mut state = self.state.lock().await;
        if !state.is_latest(ticket) {
            self.logger
                .debug(&format!("Discarding stale response for page {}", page));
            return (LoadOutcome::Discarded, 0);
        }

        match result {
            Ok(result) => {
                let shown = result.items.len();
                let info = state.apply(result);
                self.publish(ListEvent::PageLoaded(state.snapshot()));
                (LoadOutcome::Applied(info), shown)
            }
            Err(error) => {
                self.logger
                    .error(&format!("Error loading page {}: {}", page, error));
                state.fail(error.clone());
                self.publish(ListEvent::PageLoadFailed {
                    page,
                    error: error.clone(),
                });
                (LoadOutcome::Failed(error), 0)
            }
        }
    }
}

#[async_trait]
impl ProductListUseCase for ProductListCoordinator {
    async fn load_page(&self, page: u32) -> LoadOutcome {
        self.load_counted(page).await.0
    }

    async fn reload(&self) -> LoadOutcome {
        let page = self.state.lock().await.current_page;
        self.load_page(page).await
    }

    async fn create(&self, form: &dyn ProductForm) -> Result<Product, MutationError> {
        if !form.is_valid() {
            self.logger.debug("Ignoring create, the form is invalid");
            return Err(MutationError::InvalidForm);
        }

        {
            let mut state = self.state.lock().await;
            if state.is_mutating {
                self.logger
                    .debug("Ignoring create, another create is in flight");
                return Err(MutationError::MutationInProgress);
            }
            state.is_mutating = true;
        }
        self.publish(ListEvent::MutatingChanged(true));

        match self.create_product.execute(form.value()).await {
            Ok(product) => {
                form.reset();
                self.set_mutating(false).await;
                self.notifier.on_mutation_success(MutationKind::Create);
                self.reload().await;
                Ok(product)
            }
            Err(error) => {
                self.logger
                    .error(&format!("Error creating product: {}", error));
                self.set_mutating(false).await;
                self.notifier
                    .on_mutation_failure(MutationKind::Create, &error);
                Err(MutationError::Transport(error))
            }
        }
    }

    async fn delete(&self, id: ProductId) -> Result<(), MutationError> {
        let known = self.state.lock().await.contains(id);
        if !known {
            self.logger.warn(&format!(
                "Ignoring delete of product {}, it is not on the current page",
                id
            ));
            return Err(MutationError::UnknownProduct(id));
        }

        if let Err(error) = self.delete_product.execute(DeleteProductParams { id }).await {
            self.logger
                .error(&format!("Error deleting product {}: {}", id, error));
            self.notifier
                .on_mutation_failure(MutationKind::Delete, &error);
            return Err(MutationError::Transport(error));
        }

        self.notifier.on_mutation_success(MutationKind::Delete);
        let page = self.state.lock().await.current_page;
        if let (LoadOutcome::Applied(info), 0) = self.load_counted(page).await {
            self.step_back_from_empty(info).await;
        }
        Ok(())
    }

    async fn next_page(&self) -> Option<LoadOutcome> {
        let target = {
            let state = self.state.lock().await;
            if state.current_page >= state.total_pages {
                return None;
            }
            state.current_page + 1
        };
        Some(self.load_page(target).await)
    }

    async fn prev_page(&self) -> Option<LoadOutcome> {
        let target = {
            let state = self.state.lock().await;
            if state.current_page <= 1 {
                return None;
            }
            state.current_page - 1
        };
        Some(self.load_page(target).await)
    }

    async fn go_to_page(&self, page: u32) -> LoadOutcome {
        self.load_page(page).await
    }

    async fn visible_page_window(&self) -> Vec<u32> {
        let state = self.state.lock().await;
        visible_page_window(state.current_page, state.total_pages)
    }

    async fn snapshot(&self) -> ListSnapshot {
        self.state.lock().await.snapshot()
    }

    fn subscribe(&self) -> broadcast::Receiver<ListEvent> {
        self.events.subscribe()
    }
}

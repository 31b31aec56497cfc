use async_trait::async_trait;

use business::domain::errors::TransportError;
use business::domain::product::model::Product;
use business::domain::product::page::PaginatedResult;
use business::domain::product::repository::ProductRepository;
use business::domain::product::use_cases::create::CreateProductParams;
use business::domain::product::value_objects::ProductId;

use crate::client::{ApiClient, to_transport_error};
use crate::dto::{CreateProductRequest, PaginatedResponseDto, ProductDto};

/// `ProductRepository` backed by the products REST API.
pub struct ProductRepositoryHttp {
    client: ApiClient,
}

impl ProductRepositoryHttp {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryHttp {
    async fn get_page(&self, page: u32) -> Result<PaginatedResult, TransportError> {
        let response = self
            .client
            .client
            .get(self.client.products_url())
            .query(&[("page", page)])
            .send()
            .await
            .map_err(to_transport_error)?
            .error_for_status()
            .map_err(to_transport_error)?;

        let body: PaginatedResponseDto = response.json().await.map_err(to_transport_error)?;
        Ok(body.into_domain())
    }

    async fn create(&self, params: &CreateProductParams) -> Result<Product, TransportError> {
        let response = self
            .client
            .client
            .post(self.client.products_url())
            .json(&CreateProductRequest::from(params))
            .send()
            .await
            .map_err(to_transport_error)?
            .error_for_status()
            .map_err(to_transport_error)?;

        let body: ProductDto = response.json().await.map_err(to_transport_error)?;
        Ok(body.into_domain())
    }

    async fn delete(&self, id: ProductId) -> Result<(), TransportError> {
        // The confirmation body is plain text and carries nothing we use.
        self.client
            .client
            .delete(self.client.product_url(id))
            .send()
            .await
            .map_err(to_transport_error)?
            .error_for_status()
            .map_err(to_transport_error)?
            .text()
            .await
            .map_err(to_transport_error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex as StdMutex};
    use std::time::Duration;

    use super::*;
    use axum::{
        Json, Router,
        extract::{Path, Query, State},
        http::StatusCode,
        routing::{delete, get},
    };
    use business::application::product::create::CreateProductUseCaseImpl;
    use business::application::product::delete::DeleteProductUseCaseImpl;
    use business::application::product::fetch_page::FetchPageUseCaseImpl;
    use business::application::product::list_coordinator::ProductListCoordinator;
    use business::domain::logger::Logger;
    use business::domain::product::list_state::{ListConfig, LoadOutcome};
    use business::domain::product::page::PageInfo;
    use business::domain::product::services::{MutationNotifier, ProductForm};
    use business::domain::product::use_cases::manage_list::ProductListUseCase;
    use business::domain::product::value_objects::MutationKind;
    use chrono::Utc;
    use reqwest::Client;
    use serde::Deserialize;
    use tokio::{net::TcpListener, sync::Mutex};

    use crate::dto::PageInfoDto;

    const PAGE_SIZE: usize = 2;

    #[derive(Default)]
    struct StoreInner {
        products: Vec<Product>,
        next_id: i64,
        requested_pages: Vec<u32>,
    }

    /// In-memory products API, paginated like the real backend.
    #[derive(Clone, Default)]
    struct FakeStore {
        inner: Arc<Mutex<StoreInner>>,
    }

    impl FakeStore {
        async fn seed(&self, names: &[&str]) {
            let mut inner = self.inner.lock().await;
            for name in names {
                inner.next_id += 1;
                let id = inner.next_id;
                inner.products.push(Product::from_repository(
                    ProductId::new(id),
                    name.to_string(),
                    1.0,
                    1,
                    true,
                    Utc::now(),
                ));
            }
        }
    }

    #[derive(Deserialize)]
    struct PageQuery {
        page: Option<u32>,
    }

    async fn handle_list(
        State(store): State<FakeStore>,
        Query(query): Query<PageQuery>,
    ) -> Json<PaginatedResponseDto> {
        let mut inner = store.inner.lock().await;
        let requested = query.page.unwrap_or(1);
        inner.requested_pages.push(requested);

        let total = inner.products.len();
        let last_page = total.div_ceil(PAGE_SIZE).max(1) as u32;
        let page = requested.clamp(1, last_page);
        let data = inner
            .products
            .iter()
            .skip((page as usize - 1) * PAGE_SIZE)
            .take(PAGE_SIZE)
            .map(ProductDto::from)
            .collect();

        Json(PaginatedResponseDto {
            data,
            page_info: PageInfoDto {
                total: total as u64,
                page,
                last_page,
            },
        })
    }

    async fn handle_create(
        State(store): State<FakeStore>,
        Json(request): Json<CreateProductRequest>,
    ) -> (StatusCode, Json<ProductDto>) {
        let mut inner = store.inner.lock().await;
        inner.next_id += 1;
        let product = Product::from_repository(
            ProductId::new(inner.next_id),
            request.name,
            request.price,
            request.stock,
            true,
            Utc::now(),
        );
        let body = ProductDto::from(&product);
        inner.products.push(product);
        (StatusCode::CREATED, Json(body))
    }

    async fn handle_delete(
        State(store): State<FakeStore>,
        Path(id): Path<i64>,
    ) -> Result<String, StatusCode> {
        let mut inner = store.inner.lock().await;
        let before = inner.products.len();
        inner.products.retain(|p| p.id != ProductId::new(id));
        if inner.products.len() == before {
            return Err(StatusCode::NOT_FOUND);
        }
        Ok(format!("Product {} deleted", id))
    }

    async fn spawn_server(app: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        format!("http://{addr}/api")
    }

    async fn spawn_store(store: FakeStore) -> String {
        let app = Router::new()
            .route("/api/products", get(handle_list).post(handle_create))
            .route("/api/products/{id}", delete(handle_delete))
            .with_state(store);
        spawn_server(app).await
    }

    fn repository(base_url: &str, timeout: Duration) -> ProductRepositoryHttp {
        let client = Client::builder()
            .no_proxy()
            .timeout(timeout)
            .build()
            .expect("client");
        ProductRepositoryHttp::new(ApiClient::with_client(client, base_url).expect("base url"))
    }

    #[tokio::test]
    async fn should_fetch_requested_page_with_metadata() {
        let store = FakeStore::default();
        store.seed(&["Pen", "Pencil", "Eraser"]).await;
        let base_url = spawn_store(store.clone()).await;
        let repository = repository(&base_url, Duration::from_secs(5));

        let result = repository.get_page(2).await.unwrap();

        assert_eq!(result.info, PageInfo::new(3, 2, 2));
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.items[0].name, "Eraser");
        assert_eq!(store.inner.lock().await.requested_pages, vec![2]);
    }

    #[tokio::test]
    async fn should_report_server_clamped_page() {
        let store = FakeStore::default();
        store.seed(&["Pen"]).await;
        let base_url = spawn_store(store).await;
        let repository = repository(&base_url, Duration::from_secs(5));

        let result = repository.get_page(9).await.unwrap();

        assert_eq!(result.info.page, 1);
    }

    #[tokio::test]
    async fn should_map_error_status_to_transport_error() {
        let app = Router::new().route(
            "/api/products",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let base_url = spawn_server(app).await;
        let repository = repository(&base_url, Duration::from_secs(5));

        let result = repository.get_page(1).await;

        assert_eq!(result.unwrap_err(), TransportError::status(500));
    }

    #[tokio::test]
    async fn should_map_malformed_body_to_transport_error() {
        let app = Router::new().route("/api/products", get(|| async { "not json" }));
        let base_url = spawn_server(app).await;
        let repository = repository(&base_url, Duration::from_secs(5));

        let result = repository.get_page(1).await;

        assert_eq!(result.unwrap_err(), TransportError::malformed_body());
    }

    #[tokio::test]
    async fn should_map_slow_response_to_timeout() {
        let app = Router::new().route(
            "/api/products",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(2)).await;
                "{}"
            }),
        );
        let base_url = spawn_server(app).await;
        let repository = repository(&base_url, Duration::from_millis(100));

        let result = repository.get_page(1).await;

        assert_eq!(result.unwrap_err(), TransportError::timeout());
    }

    #[tokio::test]
    async fn should_map_refused_connection_to_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        drop(listener);
        let repository = repository(&format!("http://{addr}/api"), Duration::from_secs(5));

        let result = repository.get_page(1).await;

        assert_eq!(result.unwrap_err(), TransportError::network());
    }

    #[tokio::test]
    async fn should_create_product_and_return_server_fields() {
        let store = FakeStore::default();
        let base_url = spawn_store(store.clone()).await;
        let repository = repository(&base_url, Duration::from_secs(5));

        let product = repository
            .create(&CreateProductParams {
                name: "Webcam".to_string(),
                price: 59.9,
                stock: 14,
            })
            .await
            .unwrap();

        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.name, "Webcam");
        assert_eq!(product.price, 59.9);
        assert_eq!(product.stock, 14);
        assert_eq!(store.inner.lock().await.products.len(), 1);
    }

    #[tokio::test]
    async fn should_delete_product_and_ignore_text_body() {
        let store = FakeStore::default();
        store.seed(&["Pen", "Pencil"]).await;
        let base_url = spawn_store(store.clone()).await;
        let repository = repository(&base_url, Duration::from_secs(5));

        repository.delete(ProductId::new(1)).await.unwrap();

        let remaining = store.inner.lock().await.products.clone();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].name, "Pencil");
    }

    #[tokio::test]
    async fn should_fail_delete_of_missing_product() {
        let base_url = spawn_store(FakeStore::default()).await;
        let repository = repository(&base_url, Duration::from_secs(5));

        let result = repository.delete(ProductId::new(404)).await;

        assert_eq!(result.unwrap_err(), TransportError::status(404));
    }

    struct SilentLogger;

    impl Logger for SilentLogger {
        fn info(&self, _message: &str) {}
        fn warn(&self, _message: &str) {}
        fn error(&self, _message: &str) {}
        fn debug(&self, _message: &str) {}
    }

    #[derive(Default)]
    struct RecordingNotifier {
        successes: StdMutex<Vec<MutationKind>>,
    }

    impl MutationNotifier for RecordingNotifier {
        fn on_mutation_success(&self, kind: MutationKind) {
            self.successes.lock().unwrap().push(kind);
        }

        fn on_mutation_failure(&self, _kind: MutationKind, _error: &TransportError) {}
    }

    struct FixedForm(CreateProductParams);

    impl ProductForm for FixedForm {
        fn is_valid(&self) -> bool {
            true
        }

        fn value(&self) -> CreateProductParams {
            self.0.clone()
        }

        fn reset(&self) {}
    }

    fn coordinator(
        repository: ProductRepositoryHttp,
        notifier: Arc<RecordingNotifier>,
    ) -> ProductListCoordinator {
        let repository: Arc<dyn ProductRepository> = Arc::new(repository);
        let logger: Arc<dyn Logger> = Arc::new(SilentLogger);
        ProductListCoordinator::new(
            Arc::new(FetchPageUseCaseImpl {
                repository: repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(CreateProductUseCaseImpl {
                repository: repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(DeleteProductUseCaseImpl {
                repository,
                logger: logger.clone(),
            }),
            notifier,
            logger,
            ListConfig::default(),
        )
    }

    #[tokio::test]
    async fn should_show_created_product_unchanged_after_reload() {
        let base_url = spawn_store(FakeStore::default()).await;
        let notifier = Arc::new(RecordingNotifier::default());
        let coordinator = coordinator(
            repository(&base_url, Duration::from_secs(5)),
            notifier.clone(),
        );
        coordinator.load_page(1).await;

        let created = coordinator
            .create(&FixedForm(CreateProductParams {
                name: "Monitor Arm".to_string(),
                price: 89.25,
                stock: 6,
            }))
            .await
            .unwrap();
        assert!(matches!(coordinator.reload().await, LoadOutcome::Applied(_)));

        let snapshot = coordinator.snapshot().await;
        let shown = snapshot
            .items
            .iter()
            .find(|p| p.id == created.id)
            .expect("created product on page");
        assert_eq!(shown.name, "Monitor Arm");
        assert_eq!(shown.price, 89.25);
        assert_eq!(shown.stock, 6);
        assert!(shown.id.value() > 0);
        assert_eq!(shown.created_at, created.created_at);
        assert_eq!(*notifier.successes.lock().unwrap(), vec![MutationKind::Create]);
    }

    #[tokio::test]
    async fn should_follow_server_page_after_deleting_last_product_of_last_page() {
        let store = FakeStore::default();
        store.seed(&["Pen", "Pencil", "Eraser"]).await;
        let base_url = spawn_store(store.clone()).await;
        let notifier = Arc::new(RecordingNotifier::default());
        let coordinator = coordinator(repository(&base_url, Duration::from_secs(5)), notifier);
        coordinator.load_page(2).await;

        coordinator.delete(ProductId::new(3)).await.unwrap();

        let snapshot = coordinator.snapshot().await;
        assert_eq!(snapshot.current_page, 1);
        assert_eq!(snapshot.total_pages, 1);
        assert_eq!(snapshot.items.len(), 2);
    }
}

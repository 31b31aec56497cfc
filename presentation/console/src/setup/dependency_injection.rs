use std::sync::Arc;

use http_client::client::ApiClient;
use http_client::product_repository::ProductRepositoryHttp;
use logger::TracingLogger;

use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::fetch_page::FetchPageUseCaseImpl;
use business::application::product::list_coordinator::ProductListCoordinator;
use business::domain::product::list_state::ListConfig;
use business::domain::product::repository::ProductRepository;
use business::domain::product::use_cases::manage_list::ProductListUseCase;

use crate::config::app_config::AppConfig;
use crate::console::form::ConsoleProductForm;
use crate::console::notifier::ConsoleNotifier;

pub struct DependencyContainer {
    pub product_list: Arc<dyn ProductListUseCase>,
    pub product_form: ConsoleProductForm,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        // Infrastructure adapters
        let api_client = ApiClient::new(&config.api.base_url, config.api.timeout)?;
        let product_repository = Arc::new(ProductRepositoryHttp::new(api_client));

        Ok(Self::with_repository(product_repository, config.list.clone()))
    }

    pub fn with_repository(
        product_repository: Arc<dyn ProductRepository>,
        list_config: ListConfig,
    ) -> Self {
        let logger = Arc::new(TracingLogger);

        // Product use cases
        let fetch_page_use_case = Arc::new(FetchPageUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository,
            logger: logger.clone(),
        });

        let product_list = Arc::new(ProductListCoordinator::new(
            fetch_page_use_case,
            create_use_case,
            delete_use_case,
            Arc::new(ConsoleNotifier),
            logger,
            list_config,
        ));

        Self {
            product_list,
            product_form: ConsoleProductForm::new(),
        }
    }
}

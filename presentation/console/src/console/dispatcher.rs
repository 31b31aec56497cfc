use business::domain::product::errors::MutationError;
use business::domain::product::list_state::LoadOutcome;
use business::domain::product::use_cases::manage_list::ProductListUseCase;

use super::commands::{Command, HELP};
use super::form::ConsoleProductForm;
use super::render::render_snapshot;

/// Runs one command against the product list.
///
/// Returns feedback for the user. Page renders and mutation messages arrive
/// through the event channel and the notifier, so they are not returned here.
pub async fn dispatch(
    list: &dyn ProductListUseCase,
    form: &ConsoleProductForm,
    command: Command,
) -> Option<String> {
    match command {
        Command::List => Some(render_snapshot(&list.snapshot().await)),
        Command::Reload => describe_load(list.reload().await),
        Command::Next => match list.next_page().await {
            Some(outcome) => describe_load(outcome),
            None => Some("Already on the last page".to_string()),
        },
        Command::Prev => match list.prev_page().await {
            Some(outcome) => describe_load(outcome),
            None => Some("Already on the first page".to_string()),
        },
        Command::Page(page) => describe_load(list.go_to_page(page).await),
        Command::Create { name, price, stock } => {
            form.fill(&name, &price, &stock);
            match list.create(form).await {
                Ok(_) => None,
                Err(MutationError::InvalidForm) => Some(form.errors().join("\n")),
                Err(err) => describe_mutation_error(err),
            }
        }
        Command::Delete(id) => match list.delete(id).await {
            Ok(()) => None,
            Err(err) => describe_mutation_error(err),
        },
        Command::Help => Some(HELP.to_string()),
        Command::Quit => None,
    }
}

fn describe_load(outcome: LoadOutcome) -> Option<String> {
    match outcome {
        LoadOutcome::Rejected => Some("Page numbers start at 1".to_string()),
        LoadOutcome::Applied(_) | LoadOutcome::Discarded | LoadOutcome::Failed(_) => None,
    }
}

fn describe_mutation_error(err: MutationError) -> Option<String> {
    match err {
        MutationError::MutationInProgress => {
            Some("Another change is still being saved, try again".to_string())
        }
        MutationError::UnknownProduct(id) => Some(format!("Product {} is not on this page", id)),
        // Reported by the notifier.
        MutationError::Transport(_) => None,
        MutationError::InvalidForm => Some("Invalid product".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use business::domain::errors::TransportError;
    use business::domain::product::list_state::ListConfig;
    use business::domain::product::model::Product;
    use business::domain::product::page::{PageInfo, PaginatedResult};
    use business::domain::product::repository::ProductRepository;
    use business::domain::product::use_cases::create::CreateProductParams;
    use business::domain::product::value_objects::ProductId;
    use chrono::Utc;

    use super::*;
    use crate::setup::dependency_injection::DependencyContainer;

    const PAGE_SIZE: usize = 2;

    /// Catalog kept in memory, paged like the products API.
    #[derive(Default)]
    struct InMemoryRepository {
        products: Mutex<Vec<Product>>,
    }

    impl InMemoryRepository {
        fn with_products(count: i64) -> Self {
            let products = (1..=count)
                .map(|id| {
                    Product::from_repository(
                        ProductId::new(id),
                        format!("Product {}", id),
                        10.0,
                        1,
                        true,
                        Utc::now(),
                    )
                })
                .collect();
            Self {
                products: Mutex::new(products),
            }
        }
    }

    #[async_trait]
    impl ProductRepository for InMemoryRepository {
        async fn get_page(&self, page: u32) -> Result<PaginatedResult, TransportError> {
            let products = self.products.lock().unwrap();
            let total = products.len();
            let last_page = total.div_ceil(PAGE_SIZE).max(1) as u32;
            let page = page.min(last_page);
            let items = products
                .iter()
                .skip((page as usize - 1) * PAGE_SIZE)
                .take(PAGE_SIZE)
                .cloned()
                .collect();
            Ok(PaginatedResult::new(
                items,
                PageInfo::new(total as u64, page, last_page),
            ))
        }

        async fn create(&self, params: &CreateProductParams) -> Result<Product, TransportError> {
            let mut products = self.products.lock().unwrap();
            let id = products.iter().map(|p| p.id.value()).max().unwrap_or(0) + 1;
            let product = Product::from_repository(
                ProductId::new(id),
                params.name.clone(),
                params.price,
                params.stock,
                true,
                Utc::now(),
            );
            products.push(product.clone());
            Ok(product)
        }

        async fn delete(&self, id: ProductId) -> Result<(), TransportError> {
            let mut products = self.products.lock().unwrap();
            let before = products.len();
            products.retain(|p| p.id != id);
            if products.len() == before {
                return Err(TransportError::status(404));
            }
            Ok(())
        }
    }

    async fn loaded_container(count: i64) -> DependencyContainer {
        let container = DependencyContainer::with_repository(
            Arc::new(InMemoryRepository::with_products(count)),
            ListConfig::default(),
        );
        container.product_list.load_page(1).await;
        container
    }

    async fn run(container: &DependencyContainer, line: &str) -> Option<String> {
        let command = line.parse::<Command>().unwrap();
        dispatch(
            container.product_list.as_ref(),
            &container.product_form,
            command,
        )
        .await
    }

    #[tokio::test]
    async fn should_walk_pages_and_stop_at_the_edges() {
        let container = loaded_container(5).await;

        assert_eq!(
            run(&container, "prev").await,
            Some("Already on the first page".to_string())
        );
        assert_eq!(run(&container, "next").await, None);
        assert_eq!(run(&container, "page 3").await, None);
        assert_eq!(
            run(&container, "next").await,
            Some("Already on the last page".to_string())
        );

        let snapshot = container.product_list.snapshot().await;
        assert_eq!(snapshot.current_page, 3);
        assert_eq!(snapshot.items.len(), 1);
    }

    #[tokio::test]
    async fn should_refuse_page_zero() {
        let container = loaded_container(3).await;

        assert_eq!(
            run(&container, "page 0").await,
            Some("Page numbers start at 1".to_string())
        );
        assert_eq!(container.product_list.snapshot().await.current_page, 1);
    }

    #[tokio::test]
    async fn should_print_validation_errors_and_keep_inputs() {
        let container = loaded_container(1).await;

        let feedback = run(&container, "create Lamp -2 3").await;

        assert_eq!(feedback, Some("Price must be 0 or more".to_string()));
        assert_eq!(container.product_list.snapshot().await.total_items, 1);
        assert!(!container.product_form.errors().is_empty());
    }

    #[tokio::test]
    async fn should_create_product_and_reset_form() {
        let container = loaded_container(1).await;

        let feedback = run(&container, "create Desk Lamp 19.90 4").await;

        assert_eq!(feedback, None);
        let snapshot = container.product_list.snapshot().await;
        assert_eq!(snapshot.total_items, 2);
        assert!(snapshot.items.iter().any(|p| p.name == "Desk Lamp"));
        assert_eq!(
            container.product_form.errors(),
            vec!["Name is required".to_string()]
        );
    }

    #[tokio::test]
    async fn should_refuse_to_delete_product_from_another_page() {
        let container = loaded_container(5).await;

        assert_eq!(
            run(&container, "delete 5").await,
            Some("Product 5 is not on this page".to_string())
        );
        assert_eq!(container.product_list.snapshot().await.total_items, 5);
    }

    #[tokio::test]
    async fn should_delete_visible_product() {
        let container = loaded_container(3).await;

        assert_eq!(run(&container, "delete 2").await, None);

        let snapshot = container.product_list.snapshot().await;
        assert_eq!(snapshot.total_items, 2);
        assert_eq!(
            snapshot.items.iter().map(|p| p.id.value()).collect::<Vec<_>>(),
            vec![1, 3]
        );
    }

    #[tokio::test]
    async fn should_render_current_page_on_list() {
        let container = loaded_container(3).await;

        let text = run(&container, "list").await.unwrap();

        assert!(text.contains("Product 1"));
        assert!(text.contains("Page 1 of 2 | 3 products"));
    }
}

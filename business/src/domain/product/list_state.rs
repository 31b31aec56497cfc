use crate::domain::errors::TransportError;

use super::model::Product;
use super::page::{PageInfo, PaginatedResult};
use super::value_objects::ProductId;

pub const DEFAULT_EVENT_CAPACITY: usize = 64;

/// Tunables of the product list coordinator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListConfig {
    /// Reload the previous page when a delete leaves the current page empty.
    pub step_back_on_empty_page: bool,
    /// Buffer size of the event channel handed to subscribers.
    pub event_capacity: usize,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            step_back_on_empty_page: true,
            event_capacity: DEFAULT_EVENT_CAPACITY,
        }
    }
}

/// Lifecycle of the displayed page.
///
/// Data of the last successful load survives both `Loading` and `Failed`, so
/// the presentation can keep showing it next to a spinner or an error banner.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Idle,
    Loading {
        last_good: Option<PaginatedResult>,
    },
    Loaded(PaginatedResult),
    Failed {
        error: TransportError,
        last_good: Option<PaginatedResult>,
    },
}

impl LoadState {
    pub fn last_good(&self) -> Option<&PaginatedResult> {
        match self {
            LoadState::Idle => None,
            LoadState::Loading { last_good } | LoadState::Failed { last_good, .. } => {
                last_good.as_ref()
            }
            LoadState::Loaded(result) => Some(result),
        }
    }

    fn into_last_good(self) -> Option<PaginatedResult> {
        match self {
            LoadState::Idle => None,
            LoadState::Loading { last_good } | LoadState::Failed { last_good, .. } => last_good,
            LoadState::Loaded(result) => Some(result),
        }
    }

    pub fn status(&self) -> LoadStatus {
        match self {
            LoadState::Idle => LoadStatus::Idle,
            LoadState::Loading { .. } => LoadStatus::Loading,
            LoadState::Loaded(_) => LoadStatus::Loaded,
            LoadState::Failed { error, .. } => LoadStatus::Failed(error.clone()),
        }
    }
}

/// Data-free view of [`LoadState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Idle,
    Loading,
    Loaded,
    Failed(TransportError),
}

/// Read-only copy of the list state handed to the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ListSnapshot {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_items: u64,
    pub items: Vec<Product>,
    pub is_mutating: bool,
    pub status: LoadStatus,
}

/// Result of a single `load_page` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The response was applied; carries the server metadata.
    Applied(PageInfo),
    /// A newer load started before this one resolved; its response was dropped.
    Discarded,
    /// The page number was invalid; nothing was requested.
    Rejected,
    Failed(TransportError),
}

/// Mutable state owned by the list coordinator.
#[derive(Debug)]
pub struct ListState {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_items: u64,
    pub is_mutating: bool,
    load: LoadState,
    latest_ticket: u64,
}

impl Default for ListState {
    fn default() -> Self {
        Self::new()
    }
}

impl ListState {
    pub fn new() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            total_items: 0,
            is_mutating: false,
            load: LoadState::Idle,
            latest_ticket: 0,
        }
    }

    pub fn load(&self) -> &LoadState {
        &self.load
    }

    /// Records navigation intent and returns the ticket of the new load.
    ///
    /// `current_page` is tentative until a response carrying this ticket is
    /// applied.
    pub fn begin_load(&mut self, page: u32) -> u64 {
        self.current_page = page;
        self.latest_ticket += 1;
        let previous = std::mem::replace(&mut self.load, LoadState::Idle);
        self.load = LoadState::Loading {
            last_good: previous.into_last_good(),
        };
        self.latest_ticket
    }

    pub fn is_latest(&self, ticket: u64) -> bool {
        self.latest_ticket == ticket
    }

    /// Replaces the displayed page with a server response.
    pub fn apply(&mut self, result: PaginatedResult) -> PageInfo {
        let info = result.info;
        self.current_page = info.page;
        self.total_pages = info.last_page;
        self.total_items = info.total;
        self.load = LoadState::Loaded(result);
        info
    }

    /// Marks the pending load as failed. `current_page` keeps the requested value.
    pub fn fail(&mut self, error: TransportError) {
        let previous = std::mem::replace(&mut self.load, LoadState::Idle);
        self.load = LoadState::Failed {
            error,
            last_good: previous.into_last_good(),
        };
    }

    pub fn items(&self) -> &[Product] {
        self.load
            .last_good()
            .map(|result| result.items.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.items().iter().any(|product| product.id == id)
    }

    pub fn snapshot(&self) -> ListSnapshot {
        ListSnapshot {
            current_page: self.current_page,
            total_pages: self.total_pages,
            total_items: self.total_items,
            items: self.items().to_vec(),
            is_mutating: self.is_mutating,
            status: self.load.status(),
        }
    }
}

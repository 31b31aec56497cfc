use crate::domain::errors::TransportError;

use super::list_state::ListSnapshot;

/// State changes published by the list coordinator.
///
/// Subscribers re-render on each event. Dropping the receiver unsubscribes.
#[derive(Debug, Clone, PartialEq)]
pub enum ListEvent {
    /// A page was requested; `current_page` already points at it.
    PageRequested { page: u32 },
    PageLoaded(ListSnapshot),
    PageLoadFailed { page: u32, error: TransportError },
    MutatingChanged(bool),
}

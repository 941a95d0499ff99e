/// Errors raised by the search engine.
///
/// Failing to find a route is not an error: searches return `None` for that.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// No parameters object was supplied to a search constructor.
    #[error("search parameters are required")]
    MissingParameters,
    /// Parameters were supplied but the occupancy predicate was never set.
    #[error("search parameters have no occupancy predicate")]
    MissingPredicate,
    /// A bound that must be non-negative was given a negative value.
    #[error("{field} must be non-negative, got {value}")]
    NegativeValue { field: &'static str, value: i64 },
    /// [`PriorityQueue::dequeue`](crate::PriorityQueue::dequeue) was called
    /// on an empty queue.
    #[error("cannot dequeue from an empty priority queue")]
    EmptyQueue,
}

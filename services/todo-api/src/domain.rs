// Domain layer modules
pub mod api_error;
pub mod inbound_request;
pub mod log_entry;
pub mod outbound_response;
pub mod route;
pub mod routing_policy;
pub mod todo;

// Re-exports
pub use api_error::{ApiError, ErrorBody};
pub use inbound_request::InboundRequest;
pub use log_entry::LogEntry;
pub use outbound_response::{OutboundResponse, CONTENT_TYPE_JSON};
pub use route::{PostTarget, Route};
pub use routing_policy::{MethodPolicy, RoutingPolicy};
pub use todo::{Todo, TodoCreate, PLACEHOLDER_TODO_ID};

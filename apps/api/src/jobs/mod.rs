// Job tracker: the session registry, its starter data, and the view-side
// filters and HTTP handlers that read from it.

pub mod filter;
pub mod handlers;
pub mod registry;
pub mod seed;

pub use filter::JobFilter;
pub use registry::JobRegistry;

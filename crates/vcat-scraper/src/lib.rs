pub mod client;
pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod raw;
pub mod retry;
pub mod session;
pub mod types;

pub use client::CatalogClient;
pub use error::{RecordError, ScrapeError};
pub use normalize::normalize;
pub use pipeline::{run_pipeline, PipelineOutcome, Termination};
pub use session::{FetchSession, StopReason};
pub use types::{Pagination, SearchPage};

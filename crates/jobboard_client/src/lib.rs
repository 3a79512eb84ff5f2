//! Job board client: remote job service, background request runner and
//! local key-value storage.
mod handle;
mod memory;
mod service;
mod store;
mod types;

pub use handle::ClientHandle;
pub use memory::{sample_jobs, InMemoryJobService};
pub use service::{ClientSettings, JobService, ReqwestJobService};
pub use store::{validate_key, FileStore, KeyValueStore, MemoryStore, StoreError};
pub use types::{ClientCommand, ClientError, ClientEvent, FailureKind};

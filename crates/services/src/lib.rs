#![forbid(unsafe_code)]

pub mod error;
pub mod loader;
pub mod roadmap_client;
pub mod session;

pub use error::{GENERIC_FETCH_MESSAGE, LoadError};
pub use loader::{LoadState, LoadTicket, RoadmapFetch, RoadmapSession};
pub use roadmap_client::RoadmapClient;
pub use session::SessionContext;

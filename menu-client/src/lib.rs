//! Menu Client - fetches a branch's product catalog
//!
//! Provides the single HTTP call behind the menu board and the session that
//! owns its result.

pub mod config;
pub mod error;
pub mod http;
pub mod products;
pub mod session;

pub use config::{ClientConfig, FALLBACK_BRANCH_ID};
pub use error::{ClientError, ClientResult, LOAD_FAILED_MESSAGE};
pub use self::http::{HttpClient, RequestOptions};
pub use products::{BranchCatalog, ProductSource};
pub use session::{MenuSession, MenuState};

// Re-export shared types for convenience
pub use shared::{CategoryFilter, MenuView, Product};

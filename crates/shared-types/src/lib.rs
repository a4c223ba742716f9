pub mod config;
pub mod error;
pub mod models;
pub mod navigation;
pub mod session;
pub mod status;

// Module records shown by the dashboard views
pub mod clients;
pub mod compliance;
pub mod fixtures;
pub mod notifications;
pub mod operations;
pub mod workforce;

pub use config::*;
pub use error::*;
pub use models::*;
pub use navigation::*;
pub use session::*;
pub use status::*;

// Record modules are NOT glob re-exported; several share short names
// (`ApprovalStatus`/`OccurrenceStatus`, `Priority`). Use
// shared_types::workforce::* etc. explicitly.
pub use fixtures::{DataProvider, FixtureProvider};

pub mod page_header;
pub mod status_badge;

pub use page_header::PageHeader;
pub use status_badge::status_badge;

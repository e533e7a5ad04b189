pub mod errors;
pub mod format;
pub mod page;
pub mod table;

pub use errors::DashboardError;
pub use format::{format_usd, truncate_id};
pub use page::DashboardPage;
pub use table::{HtmlTable, RenderTarget};

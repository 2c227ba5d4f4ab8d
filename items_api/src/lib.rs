mod client;
mod errors;
mod query;
pub mod types;
pub use self::client::{Client, ResponseShape};
pub use self::errors::Error;
pub use self::query::PageQuery;

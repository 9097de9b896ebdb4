pub mod query;
pub mod resolve;

pub use query::QueryError;

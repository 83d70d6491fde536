pub mod account_queries;
pub mod schema;

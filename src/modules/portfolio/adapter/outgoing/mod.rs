pub mod http_resource_fetcher;
pub mod store_resource_fetcher;

pub use http_resource_fetcher::HttpResourceFetcher;
pub use store_resource_fetcher::StoreResourceFetcher;

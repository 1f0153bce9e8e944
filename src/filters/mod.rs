pub mod codec;
pub mod store;
pub mod summary;
pub mod types;

pub use store::{FilterStore, ListingConsumer, UrlBar};
pub use types::{FilterField, FilterSet};

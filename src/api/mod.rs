pub mod client;
pub mod mock;
pub mod token;
pub mod traits;

pub use client::{ApiClient, ApiError, Navigator};
pub use mock::MockListings;
pub use token::{MemoryTokenStore, TokenStore};
pub use traits::ListingSource;

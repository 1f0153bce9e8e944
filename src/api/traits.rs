use anyhow::Result;
use async_trait::async_trait;

use crate::filters::FilterSet;
use crate::models::Property;

/// Common trait for listing providers, so views can swap the real backend
/// for the mock catalogue without caring which one they talk to.
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Fetch the properties matching the given criteria.
    async fn search(&self, filters: &FilterSet) -> Result<Vec<Property>>;

    /// Get the name of the listing source
    fn source_name(&self) -> &'static str;
}

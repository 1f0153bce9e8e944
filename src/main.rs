use estate_client::api::{ApiClient, ListingSource, MemoryTokenStore, MockListings, Navigator};
use estate_client::filters::{summary, FilterField, FilterSet, FilterStore, ListingConsumer, UrlBar};
use estate_client::models::Property;
use tracing::{info, warn, Level};

/// Stand-in for the browser address bar: logs every replaced query.
struct AddressBar;

impl UrlBar for AddressBar {
    fn replace_query(&mut self, query: &str) {
        if query.is_empty() {
            info!("address bar → /properties");
        } else {
            info!("address bar → /properties?{query}");
        }
    }
}

/// Listing view backed by the mock catalogue; re-fetches on every change.
struct ListingView {
    listings: MockListings,
    results: Vec<Property>,
}

impl ListingView {
    fn new() -> Self {
        Self {
            listings: MockListings::new(),
            results: Vec::new(),
        }
    }

    fn results(&self) -> &[Property] {
        &self.results
    }
}

impl ListingConsumer for ListingView {
    fn filters_changed(&mut self, filters: &FilterSet) {
        self.results = self.listings.search_catalogue(filters);
        info!("{} matching properties", self.results.len());
    }
}

struct LoginPage;

impl Navigator for LoginPage {
    fn goto_login(&self) {
        info!("→ redirecting to /login");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("🏠 Estate Client - Property Search");
    info!("===================================");

    // Optional starting query string, e.g. "transactionType=RENT&maxPrice=1500"
    let query = std::env::args().nth(1).unwrap_or_default();
    let mut store = FilterStore::mount(&query, AddressBar, ListingView::new());

    // A short user session: narrow down to rentals with enough rooms...
    store.update(FilterField::TransactionType, "RENT");
    store.update(FilterField::MaxPrice, "2000");
    store.update(FilterField::Rooms, "2");

    for label in summary::active_labels(store.filters()) {
        info!("active filter: {label}");
    }

    // ...then widen again by dismissing one chip.
    store.remove_label("Rooms: 2+");

    // With a backend configured, search there; otherwise the mock catalogue
    // already holds the current results.
    let results = match std::env::var("ESTATE_API_URL") {
        Ok(base) => {
            let client = ApiClient::new(&base, MemoryTokenStore::new(), LoginPage)?;
            match client.search(store.filters()).await {
                Ok(properties) => {
                    info!("✅ {} properties from {}", properties.len(), client.source_name());
                    properties
                }
                Err(err) => {
                    warn!("backend search failed ({err}), using mock catalogue");
                    store.consumer().results().to_vec()
                }
            }
        }
        Err(_) => store.consumer().results().to_vec(),
    };

    println!();
    for (i, property) in results.iter().enumerate() {
        println!("{}. {} ({} €)", i + 1, property.title, property.price);
        println!("   {} pièces, {} m², {}", property.rooms, property.surface, property.city);
        println!("   {}", property.address);
        println!();
    }

    // Save the result set
    let json = serde_json::to_string_pretty(&results)?;
    tokio::fs::write("search_results.json", json).await?;
    info!("💾 Saved {} results to search_results.json", results.len());

    Ok(())
}

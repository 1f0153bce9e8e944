use tracing::debug;

use super::codec;
use super::summary;
use super::types::{FilterField, FilterSet};

/// Address-bar surface the store writes to. Queries are always replaced,
/// never pushed, so filter edits do not pollute the navigation stack.
pub trait UrlBar {
    fn replace_query(&mut self, query: &str);
}

/// Receives the complete criteria on every change. The set is a full
/// replacement of whatever the consumer held before, not a merge.
pub trait ListingConsumer {
    fn filters_changed(&mut self, filters: &FilterSet);
}

/// Single source of truth for the current search criteria, keeping the URL
/// bar and the listing consumer in lockstep. Browser globals come in as
/// explicit contexts so the store works without a real browser.
pub struct FilterStore<U, C> {
    filters: FilterSet,
    url_bar: U,
    consumer: C,
}

impl<U: UrlBar, C: ListingConsumer> FilterStore<U, C> {
    /// Builds the initial state from the current URL query and runs one sync
    /// step so both collaborators start out consistent.
    pub fn mount(query: &str, url_bar: U, consumer: C) -> Self {
        let mut store = Self {
            filters: codec::decode(query),
            url_bar,
            consumer,
        };
        store.sync();
        store
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn consumer(&self) -> &C {
        &self.consumer
    }

    /// Replaces one field and synchronizes. The previous set is discarded as
    /// a whole; nothing is mutated in place.
    pub fn update(&mut self, field: FilterField, value: impl Into<String>) {
        self.filters = self.filters.with(field, value);
        self.sync();
    }

    /// Back to the canonical defaults.
    pub fn reset(&mut self) {
        self.filters = FilterSet::default();
        self.sync();
    }

    /// Clears the single field an active-filter chip was derived from.
    /// Unknown labels are ignored.
    pub fn remove_label(&mut self, label: &str) {
        match summary::field_for_label(label) {
            Some(field) => self.update(field, ""),
            None => debug!(label, "ignoring unknown filter label"),
        }
    }

    // URL first, consumer second, both in the same turn.
    fn sync(&mut self) {
        let query = codec::encode(&self.filters);
        self.url_bar.replace_query(&query);
        self.consumer.filters_changed(&self.filters);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    type Events = Rc<RefCell<Vec<String>>>;

    struct RecordingBar(Events);

    impl UrlBar for RecordingBar {
        fn replace_query(&mut self, query: &str) {
            self.0.borrow_mut().push(format!("url:{query}"));
        }
    }

    struct RecordingConsumer {
        events: Events,
        last: Option<FilterSet>,
    }

    impl ListingConsumer for RecordingConsumer {
        fn filters_changed(&mut self, filters: &FilterSet) {
            self.events.borrow_mut().push(format!("consumer:{}", codec::encode(filters)));
            self.last = Some(filters.clone());
        }
    }

    fn store_with_log(query: &str) -> (FilterStore<RecordingBar, RecordingConsumer>, Events) {
        let events: Events = Rc::new(RefCell::new(Vec::new()));
        let store = FilterStore::mount(
            query,
            RecordingBar(Rc::clone(&events)),
            RecordingConsumer { events: Rc::clone(&events), last: None },
        );
        (store, events)
    }

    #[test]
    fn mount_decodes_the_url_and_syncs_once() {
        let (store, events) = store_with_log("minPrice=500");
        assert_eq!(store.filters().min_price, "500");
        assert_eq!(
            *events.borrow(),
            ["url:minPrice=500", "consumer:minPrice=500"]
        );
    }

    #[test]
    fn update_replaces_the_url_before_notifying() {
        let (mut store, events) = store_with_log("");
        events.borrow_mut().clear();
        store.update(FilterField::Rooms, "3");
        assert_eq!(*events.borrow(), ["url:rooms=3", "consumer:rooms=3"]);
    }

    #[test]
    fn consumer_always_receives_the_full_set() {
        let (mut store, _events) = store_with_log("maxPrice=900");
        store.update(FilterField::SearchQuery, "balcony");
        let seen = store.consumer().last.as_ref().expect("consumer notified");
        assert_eq!(seen.max_price, "900");
        assert_eq!(seen.search_query, "balcony");
        assert_eq!(seen.transaction_type, "SALE");
    }

    #[test]
    fn reset_clears_the_query_entirely() {
        let (mut store, events) = store_with_log("rooms=2&maxPrice=1200");
        events.borrow_mut().clear();
        store.reset();
        assert_eq!(store.filters(), &FilterSet::default());
        assert_eq!(*events.borrow(), ["url:", "consumer:"]);
    }

    #[test]
    fn removing_a_known_label_clears_its_field() {
        let (mut store, _events) = store_with_log("maxPrice=2000");
        store.remove_label("Max price: 2000€");
        assert_eq!(store.filters().max_price, "");
    }

    #[test]
    fn removing_an_unknown_label_is_a_no_op() {
        let (mut store, events) = store_with_log("maxPrice=2000");
        events.borrow_mut().clear();
        store.remove_label("Garden: yes");
        assert_eq!(store.filters().max_price, "2000");
        assert!(events.borrow().is_empty());
    }
}

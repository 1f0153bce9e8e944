//! Bidirectional mapping between a [`FilterSet`] and the address-bar query
//! string. Encoding omits fields sitting at their default so a fresh search
//! produces a clean URL; decoding fills those defaults back in, which makes
//! the pair lossless.

use url::form_urlencoded;

use super::types::{FilterField, FilterSet, FILTER_FIELDS};

/// Serializes the filters into a query string (no leading `?`). One pair per
/// field whose value differs from its default, in field declaration order.
pub fn encode(filters: &FilterSet) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    for field in FILTER_FIELDS {
        let value = filters.get(field);
        if !value.is_empty() && value != field.default_value() {
            query.append_pair(field.key(), value);
        }
    }
    query.finish()
}

/// Parses a query string into a [`FilterSet`]. Never fails: unknown keys are
/// ignored, absent or empty keys take their defaults, and malformed numeric
/// values pass through as opaque strings. A leading `?` is tolerated.
pub fn decode(query: &str) -> FilterSet {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut filters = FilterSet::default();
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        if value.is_empty() {
            continue;
        }
        if let Some(field) = FilterField::from_key(&key) {
            filters = filters.with(field, value.into_owned());
        }
    }
    filters
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filters_encode_to_an_empty_query() {
        assert_eq!(encode(&FilterSet::default()), "");
    }

    #[test]
    fn only_non_default_fields_are_emitted_in_order() {
        let filters = FilterSet::default()
            .with(FilterField::SearchQuery, "loft")
            .with(FilterField::MaxPrice, "2000")
            .with(FilterField::TransactionType, "RENT");
        assert_eq!(encode(&filters), "transactionType=RENT&maxPrice=2000&searchQuery=loft");
    }

    #[test]
    fn decode_fills_defaults_for_missing_keys() {
        let filters = decode("type=HOUSE&rooms=3");
        assert_eq!(filters.property_kind, "HOUSE");
        assert_eq!(filters.rooms, "3");
        assert_eq!(filters.transaction_type, "SALE");
        assert_eq!(filters.sort_by, "createdAt");
        assert_eq!(filters.sort_order, "desc");
    }

    #[test]
    fn decode_ignores_unknown_keys_and_leading_question_mark() {
        let filters = decode("?page=2&minPrice=500&utm_source=mail");
        assert_eq!(filters.min_price, "500");
        assert_eq!(filters, FilterSet::default().with(FilterField::MinPrice, "500"));
    }

    #[test]
    fn decode_treats_empty_values_as_unset() {
        let filters = decode("transactionType=&minPrice=");
        assert_eq!(filters, FilterSet::default());
    }

    #[test]
    fn malformed_numbers_pass_through_untouched() {
        let filters = decode("minPrice=cheap");
        assert_eq!(filters.min_price, "cheap");
    }

    #[test]
    fn round_trips_after_default_filling() {
        let filters = FilterSet::default()
            .with(FilterField::SearchQuery, "près du métro")
            .with(FilterField::PropertyKind, "APARTMENT")
            .with(FilterField::MinSurface, "45")
            .with(FilterField::SortBy, "price")
            .with(FilterField::SortOrder, "asc");
        assert_eq!(decode(&encode(&filters)), filters);
    }

    #[test]
    fn round_trip_percent_encodes_reserved_characters() {
        let filters = FilterSet::default().with(FilterField::SearchQuery, "2 pièces & jardin");
        let query = encode(&filters);
        // the literal ampersand must not leak out as a pair separator
        assert!(!query.contains('&'));
        assert_eq!(decode(&query), filters);
    }

    #[test]
    fn clearing_a_defaulted_field_round_trips_to_its_default() {
        // An explicitly cleared transaction type falls back to SALE once the
        // URL is read back, since absence means default.
        let filters = FilterSet::default().with(FilterField::TransactionType, "");
        assert_eq!(encode(&filters), "");
        assert_eq!(decode(&encode(&filters)).transaction_type, "SALE");
    }
}

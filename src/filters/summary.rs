//! Derived "active filter" chips. A single table drives both the rendering of
//! labels from a [`FilterSet`] and the reverse lookup from a label back to the
//! field it came from, so the two directions cannot drift apart.

use crate::models::{PropertyKind, TransactionType};

use super::types::{FilterField, FilterSet};

struct LabelRule {
    field: FilterField,
    prefix: &'static str,
    /// Unit appended after the raw value, e.g. `€` or `m²`.
    unit: &'static str,
}

/// Sort fields are not summarized: they reorder results without narrowing
/// them, so there is nothing to "remove".
const LABEL_RULES: [LabelRule; 9] = [
    LabelRule { field: FilterField::SearchQuery, prefix: "Search", unit: "" },
    LabelRule { field: FilterField::TransactionType, prefix: "Transaction", unit: "" },
    LabelRule { field: FilterField::PropertyKind, prefix: "Property", unit: "" },
    LabelRule { field: FilterField::MinPrice, prefix: "Min price", unit: "€" },
    LabelRule { field: FilterField::MaxPrice, prefix: "Max price", unit: "€" },
    LabelRule { field: FilterField::MinSurface, prefix: "Min surface", unit: "m²" },
    LabelRule { field: FilterField::MaxSurface, prefix: "Max surface", unit: "m²" },
    LabelRule { field: FilterField::Rooms, prefix: "Rooms", unit: "+" },
    LabelRule { field: FilterField::Bedrooms, prefix: "Bedrooms", unit: "+" },
];

/// One human-readable label per non-empty summarized field, in table order.
pub fn active_labels(filters: &FilterSet) -> Vec<String> {
    LABEL_RULES
        .iter()
        .filter_map(|rule| {
            let value = filters.get(rule.field);
            if value.is_empty() {
                return None;
            }
            Some(format!("{}: {}{}", rule.prefix, display_value(rule.field, value), rule.unit))
        })
        .collect()
}

/// Maps a label produced by [`active_labels`] back to its field. Labels with
/// an unknown prefix yield `None`, which callers treat as a no-op.
pub fn field_for_label(label: &str) -> Option<FilterField> {
    let (prefix, _) = label.split_once(": ")?;
    LABEL_RULES
        .iter()
        .find(|rule| rule.prefix == prefix)
        .map(|rule| rule.field)
}

/// Enumerated values render as words; anything unrecognized shows as-is.
fn display_value<'a>(field: FilterField, value: &'a str) -> &'a str {
    match field {
        FilterField::TransactionType => TransactionType::parse(value)
            .map(TransactionType::label)
            .unwrap_or(value),
        FilterField::PropertyKind => PropertyKind::parse(value)
            .map(PropertyKind::label)
            .unwrap_or(value),
        _ => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_label_per_set_field() {
        let filters = FilterSet::default()
            .with(FilterField::SearchQuery, "loft")
            .with(FilterField::TransactionType, "RENT")
            .with(FilterField::MaxPrice, "2000");
        assert_eq!(
            active_labels(&filters),
            vec!["Search: loft", "Transaction: For rent", "Max price: 2000€"]
        );
    }

    #[test]
    fn removing_the_max_price_label_clears_only_max_price() {
        let filters = FilterSet::default()
            .with(FilterField::SearchQuery, "loft")
            .with(FilterField::TransactionType, "RENT")
            .with(FilterField::MaxPrice, "2000");
        let field = field_for_label("Max price: 2000€").expect("known label");
        let cleared = filters.with(field, "");
        assert_eq!(cleared.max_price, "");
        assert_eq!(cleared.search_query, "loft");
        assert_eq!(cleared.transaction_type, "RENT");
    }

    #[test]
    fn every_rendered_label_maps_back_to_its_own_field() {
        for rule in &LABEL_RULES {
            let filters = FilterSet::default().with(rule.field, "RENT");
            let labels = active_labels(&filters);
            let label = labels
                .iter()
                .find(|label| label.starts_with(rule.prefix))
                .expect("field should render a label");
            assert_eq!(field_for_label(label), Some(rule.field));
        }
    }

    #[test]
    fn unknown_labels_map_to_nothing() {
        assert_eq!(field_for_label("Garden: yes"), None);
        assert_eq!(field_for_label("not a label"), None);
    }

    #[test]
    fn enumerated_values_render_as_words() {
        let filters = FilterSet::default()
            .with(FilterField::PropertyKind, "HOUSE")
            .with(FilterField::MinSurface, "20");
        let labels = active_labels(&filters);
        assert!(labels.contains(&"Property: House".to_string()));
        assert!(labels.contains(&"Min surface: 20m²".to_string()));
        // the default SALE transaction still shows as a chip
        assert!(labels.contains(&"Transaction: For sale".to_string()));
    }
}

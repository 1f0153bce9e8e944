use serde::{Deserialize, Serialize};

/// Named fields of a [`FilterSet`], in URL parameter order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    PropertyKind,
    TransactionType,
    MinPrice,
    MaxPrice,
    MinSurface,
    MaxSurface,
    Rooms,
    Bedrooms,
    SortBy,
    SortOrder,
    SearchQuery,
}

/// All fields, in the order their query parameters are emitted.
pub const FILTER_FIELDS: [FilterField; 11] = [
    FilterField::PropertyKind,
    FilterField::TransactionType,
    FilterField::MinPrice,
    FilterField::MaxPrice,
    FilterField::MinSurface,
    FilterField::MaxSurface,
    FilterField::Rooms,
    FilterField::Bedrooms,
    FilterField::SortBy,
    FilterField::SortOrder,
    FilterField::SearchQuery,
];

impl FilterField {
    /// Key used for this field in the URL query string.
    pub fn key(self) -> &'static str {
        match self {
            FilterField::PropertyKind => "type",
            FilterField::TransactionType => "transactionType",
            FilterField::MinPrice => "minPrice",
            FilterField::MaxPrice => "maxPrice",
            FilterField::MinSurface => "minSurface",
            FilterField::MaxSurface => "maxSurface",
            FilterField::Rooms => "rooms",
            FilterField::Bedrooms => "bedrooms",
            FilterField::SortBy => "sortBy",
            FilterField::SortOrder => "sortOrder",
            FilterField::SearchQuery => "searchQuery",
        }
    }

    /// Value a field takes when it is absent from the URL.
    pub fn default_value(self) -> &'static str {
        match self {
            FilterField::TransactionType => "SALE",
            FilterField::SortBy => "createdAt",
            FilterField::SortOrder => "desc",
            _ => "",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        FILTER_FIELDS.iter().copied().find(|field| field.key() == key)
    }
}

/// Current search criteria. Every field is always present; an empty string
/// means "unset". Numeric fields are kept as opaque strings at this layer,
/// coercion is up to whoever consumes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSet {
    #[serde(rename = "type")]
    pub property_kind: String,
    pub transaction_type: String,
    pub min_price: String,
    pub max_price: String,
    pub min_surface: String,
    pub max_surface: String,
    pub rooms: String,
    pub bedrooms: String,
    pub sort_by: String,
    pub sort_order: String,
    pub search_query: String,
}

impl Default for FilterSet {
    fn default() -> Self {
        let mut filters = Self {
            property_kind: String::new(),
            transaction_type: String::new(),
            min_price: String::new(),
            max_price: String::new(),
            min_surface: String::new(),
            max_surface: String::new(),
            rooms: String::new(),
            bedrooms: String::new(),
            sort_by: String::new(),
            sort_order: String::new(),
            search_query: String::new(),
        };
        for field in FILTER_FIELDS {
            filters.set(field, field.default_value());
        }
        filters
    }
}

impl FilterSet {
    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::PropertyKind => &self.property_kind,
            FilterField::TransactionType => &self.transaction_type,
            FilterField::MinPrice => &self.min_price,
            FilterField::MaxPrice => &self.max_price,
            FilterField::MinSurface => &self.min_surface,
            FilterField::MaxSurface => &self.max_surface,
            FilterField::Rooms => &self.rooms,
            FilterField::Bedrooms => &self.bedrooms,
            FilterField::SortBy => &self.sort_by,
            FilterField::SortOrder => &self.sort_order,
            FilterField::SearchQuery => &self.search_query,
        }
    }

    /// Returns a copy with the named field replaced. The receiver is left
    /// untouched; edits always produce a fresh set.
    pub fn with(&self, field: FilterField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.set(field, value);
        next
    }

    fn set(&mut self, field: FilterField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FilterField::PropertyKind => self.property_kind = value,
            FilterField::TransactionType => self.transaction_type = value,
            FilterField::MinPrice => self.min_price = value,
            FilterField::MaxPrice => self.max_price = value,
            FilterField::MinSurface => self.min_surface = value,
            FilterField::MaxSurface => self.max_surface = value,
            FilterField::Rooms => self.rooms = value,
            FilterField::Bedrooms => self.bedrooms = value,
            FilterField::SortBy => self.sort_by = value,
            FilterField::SortOrder => self.sort_order = value,
            FilterField::SearchQuery => self.search_query = value,
        }
    }
}

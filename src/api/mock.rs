//! In-memory stand-in for the listing backend. The client never talks to a
//! real network in tests or demos; this catalogue answers searches the way
//! the backend would, including numeric coercion and sorting.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{Duration, Utc};
use tracing::debug;

use crate::filters::{FilterField, FilterSet};
use crate::models::{Property, PropertyKind, SortDirection, SortKey, TransactionType};

use super::traits::ListingSource;

pub struct MockListings {
    catalogue: Vec<Property>,
}

impl MockListings {
    pub fn new() -> Self {
        Self {
            catalogue: sample_catalogue(),
        }
    }

    pub fn with_catalogue(catalogue: Vec<Property>) -> Self {
        Self { catalogue }
    }

    /// Applies the filters the way the backend would. Numeric bounds that do
    /// not parse are dropped rather than rejected; coercion happens here, not
    /// in the filter layer.
    pub fn search_catalogue(&self, filters: &FilterSet) -> Vec<Property> {
        let min_price = int_bound(filters, FilterField::MinPrice);
        let max_price = int_bound(filters, FilterField::MaxPrice);
        let min_surface = float_bound(filters, FilterField::MinSurface);
        let max_surface = float_bound(filters, FilterField::MaxSurface);
        let min_rooms = int_bound(filters, FilterField::Rooms);
        let min_bedrooms = int_bound(filters, FilterField::Bedrooms);
        let needle = filters.search_query.to_lowercase();

        let mut matches: Vec<Property> = self
            .catalogue
            .iter()
            .filter(|property| {
                if !needle.is_empty() && !text_matches(property, &needle) {
                    return false;
                }
                if !filters.property_kind.is_empty()
                    && property.kind.as_str() != filters.property_kind
                {
                    return false;
                }
                if !filters.transaction_type.is_empty()
                    && property.transaction_type.as_str() != filters.transaction_type
                {
                    return false;
                }
                within(property.price, min_price, max_price)
                    && within_f64(property.surface, min_surface, max_surface)
                    && min_rooms.map_or(true, |n| i64::from(property.rooms) >= n)
                    && min_bedrooms.map_or(true, |n| i64::from(property.bedrooms) >= n)
            })
            .cloned()
            .collect();

        sort_results(&mut matches, filters);
        matches
    }
}

impl Default for MockListings {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ListingSource for MockListings {
    async fn search(&self, filters: &FilterSet) -> Result<Vec<Property>> {
        Ok(self.search_catalogue(filters))
    }

    fn source_name(&self) -> &'static str {
        "mock"
    }
}

fn text_matches(property: &Property, needle: &str) -> bool {
    property.title.to_lowercase().contains(needle)
        || property.description.to_lowercase().contains(needle)
        || property.city.to_lowercase().contains(needle)
}

fn int_bound(filters: &FilterSet, field: FilterField) -> Option<i64> {
    parse_bound(filters, field, str::parse::<i64>)
}

fn float_bound(filters: &FilterSet, field: FilterField) -> Option<f64> {
    parse_bound(filters, field, str::parse::<f64>)
}

fn parse_bound<V, E>(
    filters: &FilterSet,
    field: FilterField,
    parse: impl Fn(&str) -> Result<V, E>,
) -> Option<V> {
    let raw = filters.get(field);
    if raw.is_empty() {
        return None;
    }
    match parse(raw) {
        Ok(value) => Some(value),
        Err(_) => {
            debug!(key = field.key(), raw, "dropping unparseable bound");
            None
        }
    }
}

fn within(value: i64, min: Option<i64>, max: Option<i64>) -> bool {
    min.map_or(true, |m| value >= m) && max.map_or(true, |m| value <= m)
}

fn within_f64(value: f64, min: Option<f64>, max: Option<f64>) -> bool {
    min.map_or(true, |m| value >= m) && max.map_or(true, |m| value <= m)
}

fn sort_results(results: &mut [Property], filters: &FilterSet) {
    let key = SortKey::parse(&filters.sort_by).unwrap_or(SortKey::CreatedAt);
    let direction = SortDirection::parse(&filters.sort_order).unwrap_or(SortDirection::Desc);
    results.sort_by(|a, b| {
        let ordering = match key {
            SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
            SortKey::Price => a.price.cmp(&b.price),
            SortKey::Surface => a.surface.total_cmp(&b.surface),
        };
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

/// Typical listings, in the spirit of what the platform serves.
fn sample_catalogue() -> Vec<Property> {
    let now = Utc::now();
    vec![
        Property {
            id: 1,
            title: "Loft lumineux à Montmartre".to_string(),
            description: "Grand loft rénové avec verrière, proche du métro.".to_string(),
            kind: PropertyKind::Apartment,
            transaction_type: TransactionType::Rent,
            price: 1_850,
            surface: 72.0,
            rooms: 3,
            bedrooms: 2,
            address: "14 rue des Abbesses".to_string(),
            city: "Paris".to_string(),
            image_urls: vec![],
            created_at: now - Duration::days(2),
        },
        Property {
            id: 2,
            title: "Appartement familial avec balcon".to_string(),
            description: "Quatre pièces au calme, balcon filant, cave.".to_string(),
            kind: PropertyKind::Apartment,
            transaction_type: TransactionType::Sale,
            price: 545_000,
            surface: 86.5,
            rooms: 4,
            bedrooms: 3,
            address: "3 avenue Jean Jaurès".to_string(),
            city: "Lyon".to_string(),
            image_urls: vec![],
            created_at: now - Duration::days(9),
        },
        Property {
            id: 3,
            title: "Maison de ville avec jardin".to_string(),
            description: "Maison mitoyenne, jardin exposé sud, garage.".to_string(),
            kind: PropertyKind::House,
            transaction_type: TransactionType::Sale,
            price: 420_000,
            surface: 110.0,
            rooms: 5,
            bedrooms: 4,
            address: "27 rue des Lilas".to_string(),
            city: "Nantes".to_string(),
            image_urls: vec![],
            created_at: now - Duration::days(15),
        },
        Property {
            id: 4,
            title: "Studio étudiant près du campus".to_string(),
            description: "Studio meublé, idéal étudiant, charges comprises.".to_string(),
            kind: PropertyKind::Apartment,
            transaction_type: TransactionType::Rent,
            price: 620,
            surface: 21.0,
            rooms: 1,
            bedrooms: 0,
            address: "8 boulevard de la Victoire".to_string(),
            city: "Strasbourg".to_string(),
            image_urls: vec![],
            created_at: now - Duration::days(1),
        },
        Property {
            id: 5,
            title: "Villa contemporaine vue mer".to_string(),
            description: "Villa d'architecte, piscine, vue dégagée sur la baie.".to_string(),
            kind: PropertyKind::House,
            transaction_type: TransactionType::Sale,
            price: 1_290_000,
            surface: 185.0,
            rooms: 7,
            bedrooms: 5,
            address: "12 chemin des Restanques".to_string(),
            city: "Marseille".to_string(),
            image_urls: vec![],
            created_at: now - Duration::days(30),
        },
        Property {
            id: 6,
            title: "Deux pièces refait à neuf".to_string(),
            description: "Séjour traversant, cuisine équipée, proche tram.".to_string(),
            kind: PropertyKind::Apartment,
            transaction_type: TransactionType::Rent,
            price: 980,
            surface: 44.0,
            rooms: 2,
            bedrooms: 1,
            address: "5 place du Capitole".to_string(),
            city: "Toulouse".to_string(),
            image_urls: vec![],
            created_at: now - Duration::days(5),
        },
    ]
}

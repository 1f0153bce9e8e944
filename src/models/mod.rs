use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether a property is offered for sale or for rent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    Sale,
    Rent,
}

impl TransactionType {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "SALE" => Some(TransactionType::Sale),
            "RENT" => Some(TransactionType::Rent),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Sale => "SALE",
            TransactionType::Rent => "RENT",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TransactionType::Sale => "For sale",
            TransactionType::Rent => "For rent",
        }
    }
}

/// Kind of property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PropertyKind {
    Apartment,
    House,
}

impl PropertyKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "APARTMENT" => Some(PropertyKind::Apartment),
            "HOUSE" => Some(PropertyKind::House),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PropertyKind::Apartment => "APARTMENT",
            PropertyKind::House => "HOUSE",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PropertyKind::Apartment => "Apartment",
            PropertyKind::House => "House",
        }
    }
}

/// Sort key accepted by the listing search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    CreatedAt,
    Price,
    Surface,
}

impl SortKey {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "createdAt" => Some(SortKey::CreatedAt),
            "price" => Some(SortKey::Price),
            "surface" => Some(SortKey::Surface),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "asc" => Some(SortDirection::Asc),
            "desc" => Some(SortDirection::Desc),
            _ => None,
        }
    }
}

/// Property listing as served by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: PropertyKind,
    pub transaction_type: TransactionType,
    /// Monthly rent for RENT listings, full price for SALE.
    pub price: i64,
    pub surface: f64,
    pub rooms: u32,
    pub bedrooms: u32,
    pub address: String,
    pub city: String,
    #[serde(default)]
    pub image_urls: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Authenticated platform user
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

/// Property visit appointment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: i64,
    pub property_id: i64,
    pub property_title: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub message: String,
    pub status: AppointmentStatus,
}

/// Payload for booking a new visit
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointment {
    pub property_id: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enums_parse_their_wire_values() {
        assert_eq!(TransactionType::parse("RENT"), Some(TransactionType::Rent));
        assert_eq!(TransactionType::parse("LEASE"), None);
        assert_eq!(PropertyKind::parse("HOUSE"), Some(PropertyKind::House));
        assert_eq!(SortKey::parse("createdAt"), Some(SortKey::CreatedAt));
        assert_eq!(SortDirection::parse("asc"), Some(SortDirection::Asc));
    }

    #[test]
    fn property_deserializes_from_backend_json() {
        let json = r#"{
            "id": 7,
            "title": "Loft near the river",
            "description": "Bright two-room loft",
            "type": "APARTMENT",
            "transactionType": "RENT",
            "price": 1450,
            "surface": 52.5,
            "rooms": 2,
            "bedrooms": 1,
            "address": "12 quai des Arts",
            "city": "Lyon",
            "createdAt": "2026-05-01T09:30:00Z"
        }"#;
        let property: Property = serde_json::from_str(json).expect("valid payload");
        assert_eq!(property.kind, PropertyKind::Apartment);
        assert_eq!(property.transaction_type, TransactionType::Rent);
        assert!(property.image_urls.is_empty());
    }
}

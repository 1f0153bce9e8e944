//! Client-side core of a real-estate listing platform: search criteria kept
//! in lockstep with the URL query string, a derived active-filter summary,
//! and an authenticated API client with a mock catalogue fallback.

pub mod api;
pub mod filters;
pub mod models;

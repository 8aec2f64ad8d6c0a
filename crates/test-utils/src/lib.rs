//! Mandap test utilities.
//!
//! Payload builders for catalog entities. Builders emit the JSON the
//! API and services accept, so fixtures stay independent of the kernel's
//! internal types.

use serde_json::{json, Value};

/// Create a banquet payload with default values.
pub fn banquet(name: &str) -> BanquetPayload {
    BanquetPayload {
        name: name.to_string(),
        description: String::new(),
        venue_type: None,
        city: None,
        state: None,
        country: None,
        price_starting_at: 0,
        capacity: None,
        amenities: Vec::new(),
        is_premium: false,
        is_featured: false,
        status: "active".to_string(),
    }
}

/// Builder for banquet create payloads.
#[derive(Debug, Clone)]
pub struct BanquetPayload {
    pub name: String,
    pub description: String,
    pub venue_type: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub price_starting_at: u64,
    pub capacity: Option<u32>,
    pub amenities: Vec<String>,
    pub is_premium: bool,
    pub is_featured: bool,
    pub status: String,
}

impl BanquetPayload {
    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn venue_type(mut self, venue_type: &str) -> Self {
        self.venue_type = Some(venue_type.to_string());
        self
    }

    pub fn city(mut self, city: &str) -> Self {
        self.city = Some(city.to_string());
        self
    }

    pub fn state(mut self, state: &str) -> Self {
        self.state = Some(state.to_string());
        self
    }

    pub fn price(mut self, price: u64) -> Self {
        self.price_starting_at = price;
        self
    }

    pub fn capacity(mut self, capacity: u32) -> Self {
        self.capacity = Some(capacity);
        self
    }

    pub fn amenities(mut self, amenities: &[&str]) -> Self {
        self.amenities = amenities.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Flag as a paid placement.
    pub fn premium(mut self) -> Self {
        self.is_premium = true;
        self
    }

    /// Flag as an editorial placement.
    pub fn featured(mut self) -> Self {
        self.is_featured = true;
        self
    }

    /// Hide from public listings.
    pub fn inactive(mut self) -> Self {
        self.status = "inactive".to_string();
        self
    }

    /// Render as the create-payload JSON.
    pub fn json(&self) -> Value {
        json!({
            "name": self.name,
            "description": self.description,
            "venueType": self.venue_type,
            "city": self.city,
            "state": self.state,
            "country": self.country,
            "priceStartingAt": self.price_starting_at,
            "capacity": self.capacity,
            "amenities": self.amenities,
            "isPremium": self.is_premium,
            "isFeatured": self.is_featured,
            "status": self.status,
        })
    }
}

/// Create a vendor payload with default values.
pub fn vendor(name: &str) -> VendorPayload {
    VendorPayload {
        name: name.to_string(),
        description: String::new(),
        category: None,
        city: None,
        state: None,
        country: None,
        price_starting_at: 0,
        services: Vec::new(),
        is_premium: false,
        is_featured: false,
        status: "active".to_string(),
    }
}

/// Builder for vendor create payloads.
#[derive(Debug, Clone)]
pub struct VendorPayload {
    pub name: String,
    pub description: String,
    pub category: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub price_starting_at: u64,
    pub services: Vec<String>,
    pub is_premium: bool,
    pub is_featured: bool,
    pub status: String,
}

impl VendorPayload {
    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    pub fn city(mut self, city: &str) -> Self {
        self.city = Some(city.to_string());
        self
    }

    pub fn price(mut self, price: u64) -> Self {
        self.price_starting_at = price;
        self
    }

    pub fn services(mut self, services: &[&str]) -> Self {
        self.services = services.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn premium(mut self) -> Self {
        self.is_premium = true;
        self
    }

    pub fn featured(mut self) -> Self {
        self.is_featured = true;
        self
    }

    pub fn inactive(mut self) -> Self {
        self.status = "inactive".to_string();
        self
    }

    /// Render as the create-payload JSON.
    pub fn json(&self) -> Value {
        json!({
            "name": self.name,
            "description": self.description,
            "category": self.category,
            "city": self.city,
            "state": self.state,
            "country": self.country,
            "priceStartingAt": self.price_starting_at,
            "services": self.services,
            "isPremium": self.is_premium,
            "isFeatured": self.is_featured,
            "status": self.status,
        })
    }
}

/// Create an admin payload with default values.
pub fn admin(name: &str, email: &str) -> AdminPayload {
    AdminPayload {
        name: name.to_string(),
        email: email.to_string(),
        role: "admin".to_string(),
    }
}

/// Builder for admin create payloads.
#[derive(Debug, Clone)]
pub struct AdminPayload {
    pub name: String,
    pub email: String,
    pub role: String,
}

impl AdminPayload {
    /// Make this a protected superadmin account.
    pub fn superadmin(mut self) -> Self {
        self.role = "superadmin".to_string();
        self
    }

    /// Render as the create-payload JSON.
    pub fn json(&self) -> Value {
        json!({
            "name": self.name,
            "email": self.email,
            "role": self.role,
        })
    }
}

/// Create an approval request payload.
pub fn approval_request(vendor_name: &str, email: &str) -> Value {
    json!({
        "vendorName": vendor_name,
        "email": email,
        "category": "Photography",
        "message": "We would like to join the marketplace.",
    })
}

/// Create an enquiry payload for a listing.
pub fn enquiry(listing_id: &str, listing_kind: &str) -> Value {
    json!({
        "listingId": listing_id,
        "listingKind": listing_kind,
        "name": "Priya Sharma",
        "email": "priya@example.com",
        "phone": "+91 98765 43210",
        "eventDate": "2026-11-21",
        "message": "Is the venue available on this date?",
    })
}

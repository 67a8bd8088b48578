//! Test fixtures for webserver integration tests

use serde_json::{Value, json};

/// Contact form body as the site posts it
pub fn contact_body() -> Value {
    json!({
        "name": "Sunita Verma",
        "phone": "+91 99887 76655",
        "email": "sunita@example.com",
        "serviceType": "Same Day Delivery",
        "message": "Do you deliver to Navi Mumbai on Sundays?"
    })
}

/// Pickup form body without the optional instructions
pub fn pickup_body() -> Value {
    json!({
        "name": "Neha Singh",
        "phone": "+91 91234 56789",
        "address": "221 Sector 14, Gurgaon",
        "packageSize": "Small (up to 1 kg)",
        "pickupDate": "2024-12-21",
        "preferredTime": "2:00 PM - 4:00 PM"
    })
}

/// Quote form body
pub fn quote_body(weight: Value, service_type: &str) -> Value {
    json!({
        "fromCity": "Delhi",
        "toCity": "Bangalore",
        "weight": weight,
        "serviceType": service_type
    })
}

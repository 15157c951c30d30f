//! Public types for the contact API
use serde::{Deserialize, Serialize};

/// A booking or contact request from the site's contact form.
/// Every field but `message` is required.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub from: String,
    pub to: String,
    // YYYY-MM-DD
    pub date: String,
    // HH:MM, 24 hour clock
    pub time: String,
    pub message: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ContactResponse {
    pub id: String,
    pub message: String,
}

pub const CONTACT_THANKS: &str = "Thank you for your message! We will get back to you soon.";

impl ContactResponse {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            message: CONTACT_THANKS.to_string(),
        }
    }
}

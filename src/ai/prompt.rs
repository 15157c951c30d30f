//! Prompts rendered with Handlebars. The business details that go
//! into them come from configuration, so the registry runs in strict
//! mode and a missing field fails at render time instead of silently
//! producing an empty string.

use std::fmt;

use anyhow::Result;
use handlebars::{Handlebars, no_escape};
use serde_json::json;

#[derive(Debug)]
pub enum Prompt {
    CabBookingSystem,
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl From<Prompt> for String {
    fn from(item: Prompt) -> String {
        format!("{:?}", item)
    }
}

/// Topics the assistant is allowed to help with.
pub fn focus_areas(city: &str) -> Vec<String> {
    vec![
        "Cab booking and reservations".to_string(),
        "Taxi services and rates".to_string(),
        "Airport transfers".to_string(),
        "Local and outstation travel".to_string(),
        format!("{} sightseeing tours", city),
        "Vehicle types and fleet information".to_string(),
        "Payment methods".to_string(),
        "Booking process".to_string(),
        "Customer service".to_string(),
        "Travel tips and recommendations".to_string(),
    ]
}

const CAB_BOOKING_SYSTEM_PROMPT: &str = r"You are an AI assistant for {{business_name}}, a taxi service in {{city}}. You can only respond to questions related to cab booking, taxi services, transportation, and travel within {{city}}.

If a user asks about anything unrelated to cab booking, taxi services, or transportation in {{city}}, politely redirect them to ask about cab booking services only.

Your responses should be helpful, concise, and focused on:
{{#each focus_areas}}
- {{this}}
{{/each}}

Always maintain a professional and friendly tone. If you don't have specific information about {{business_name}}'s rates or services, provide general guidance about taxi services in {{city}}.";

pub fn templates<'a>() -> Handlebars<'a> {
    let mut registry = Handlebars::new();
    registry.set_strict_mode(true);
    // Prompts are plain text, not HTML
    registry.register_escape_fn(no_escape);
    registry
        .register_template_string(
            &Prompt::CabBookingSystem.to_string(),
            CAB_BOOKING_SYSTEM_PROMPT,
        )
        .expect("Failed to register template");
    registry
}

/// Render the fixed system instruction sent ahead of every user
/// message.
pub fn cab_booking_system_prompt(business_name: &str, city: &str) -> Result<String> {
    let registry = templates();
    let prompt = registry.render(
        &Prompt::CabBookingSystem.to_string(),
        &json!({
            "business_name": business_name,
            "city": city,
            "focus_areas": focus_areas(city),
        }),
    )?;
    Ok(prompt)
}

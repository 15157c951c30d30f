//! State for one chat session with the relay: the transcript, what the
//! user is typing, and whether a reply is still pending.

use anyhow::{Error, Result};

use super::client::RelayClient;
use super::transcript::{Message, Sender, Transcript};

pub const DEFAULT_SUPPORT_PHONE: &str = "+91 70217 51691";

/// Shown in place of an answer when the relay can't be reached.
pub fn apology(support_phone: &str) -> String {
    format!(
        "I apologize, but I'm having trouble responding right now. Please try again later or call us directly at {}.",
        support_phone
    )
}

pub fn greeting(business_name: &str, city: &str) -> String {
    format!(
        "Hello! I'm your {} AI assistant. I can help you with cab booking, taxi services, and travel information in {}. How can I assist you today?",
        business_name, city
    )
}

/// Canned questions offered next to the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuickReply {
    BookCab,
    Rates,
    Airport,
}

impl QuickReply {
    pub const ALL: [QuickReply; 3] = [QuickReply::BookCab, QuickReply::Rates, QuickReply::Airport];

    pub fn label(&self) -> &'static str {
        match self {
            QuickReply::BookCab => "Book a Cab",
            QuickReply::Rates => "Rates",
            QuickReply::Airport => "Airport",
        }
    }

    pub fn query(&self) -> &'static str {
        match self {
            QuickReply::BookCab => "How do I book a cab?",
            QuickReply::Rates => "What are your rates?",
            QuickReply::Airport => "Airport transfer",
        }
    }
}

#[derive(Debug)]
pub struct ChatWidget {
    transcript: Transcript,
    input: String,
    awaiting: bool,
    support_phone: String,
}

impl ChatWidget {
    pub fn new(greeting: &str, support_phone: &str) -> Self {
        let mut transcript = Transcript::new();
        transcript.push(Message::new(Sender::Assistant, greeting));
        Self {
            transcript,
            input: String::new(),
            awaiting: false,
            support_phone: support_phone.to_string(),
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
    }

    pub fn is_awaiting(&self) -> bool {
        self.awaiting
    }

    /// Whether the send control should be enabled.
    pub fn can_send(&self) -> bool {
        !self.awaiting && !self.input.trim().is_empty()
    }

    /// Pre-fill the input with a canned question. Doesn't send it.
    pub fn apply_quick_reply(&mut self, reply: QuickReply) {
        self.set_input(reply.query());
    }

    /// Move the input into the transcript as a user turn and mark the
    /// session as waiting. Returns the text to send, or `None` when
    /// there is nothing to send or a reply is still pending.
    pub fn begin_submit(&mut self) -> Option<String> {
        if !self.can_send() {
            return None;
        }

        let text = std::mem::take(&mut self.input);
        self.transcript.push(Message::new(Sender::User, &text));
        self.awaiting = true;
        Some(text)
    }

    /// Record the outcome of the pending request. Failures and empty
    /// replies become the apology so there's always something to show.
    pub fn settle(&mut self, result: Result<String, Error>) {
        let text = match result {
            Ok(reply) if !reply.trim().is_empty() => reply,
            Ok(_) => {
                tracing::warn!("Relay returned an empty reply");
                apology(&self.support_phone)
            }
            Err(e) => {
                tracing::warn!("Failed to get a reply from the relay: {}", e);
                apology(&self.support_phone)
            }
        };
        self.transcript.push(Message::new(Sender::Assistant, &text));
        self.awaiting = false;
    }

    /// Send the current input and wait for the reply. Returns `false`
    /// if nothing was sent.
    pub async fn submit<C>(&mut self, client: &C) -> bool
    where
        C: RelayClient + ?Sized,
    {
        let Some(text) = self.begin_submit() else {
            return false;
        };
        let result = client.send(&text).await;
        self.settle(result);
        true
    }
}

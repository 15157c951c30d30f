use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::core::AppConfig;
use crate::widget::{ChatWidget, HttpRelayClient, Message, QuickReply, Sender, greeting};

/// What a line typed at the prompt asks for.
#[derive(Debug, PartialEq)]
enum Input<'a> {
    Quit,
    Quick(QuickReply),
    Help,
    Text(&'a str),
}

fn parse_input(line: &str) -> Input<'_> {
    match line.trim() {
        "/quit" | "/exit" => Input::Quit,
        "/book" => Input::Quick(QuickReply::BookCab),
        "/rates" => Input::Quick(QuickReply::Rates),
        "/airport" => Input::Quick(QuickReply::Airport),
        "/help" => Input::Help,
        _ => Input::Text(line),
    }
}

fn print_message(msg: &Message) {
    let who = match msg.sender() {
        Sender::User => "you",
        Sender::Assistant => "assistant",
    };
    println!("[{}] {}: {}", msg.display_time(), who, msg.text());
}

fn print_help() {
    println!("Quick questions (fills the prompt, press enter to send):");
    println!("  /book     {}", QuickReply::BookCab.label());
    println!("  /rates    {}", QuickReply::Rates.label());
    println!("  /airport  {}", QuickReply::Airport.label());
    println!("  /quit     Leave the chat");
}

pub async fn run(url: String) -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    let config = AppConfig::default();
    let client = HttpRelayClient::new(&url);
    let mut widget = ChatWidget::new(
        &greeting(&config.business_name, &config.business_city),
        &config.support_phone,
    );

    widget.transcript().iter().for_each(print_message);
    println!(
        "I can only help with cab booking and taxi service related queries. Type /help for shortcuts."
    );

    loop {
        // A quick reply leaves its question in the input so the user
        // can edit it before sending
        let initial = widget.input().to_string();
        let readline = rl.readline_with_initial(">>> ", (&initial, ""));
        match readline {
            Ok(line) => match parse_input(&line) {
                Input::Quit => break,
                Input::Help => print_help(),
                Input::Quick(reply) => widget.apply_quick_reply(reply),
                Input::Text(text) => {
                    widget.set_input(text);
                    if !widget.can_send() {
                        continue;
                    }
                    let _ = rl.add_history_entry(text);
                    println!("Thinking...");
                    widget.submit(&client).await;
                    if let Some(msg) = widget.transcript().last() {
                        print_message(msg);
                    }
                }
            },
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}

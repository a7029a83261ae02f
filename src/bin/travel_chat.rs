//! Terminal front end for the Smart Travel Assistant.
//!
//! Each stdin line is typed into the input and submitted with Enter.
//! `/suggest N` sends suggested question N, `/quit` exits.

use std::sync::Arc;

use smart_travel_assistant::adapters::{HttpChatEndpoint, HttpEndpointConfig};
use smart_travel_assistant::application::{InputController, SubmitTrigger};
use smart_travel_assistant::config::AppConfig;
use smart_travel_assistant::domain::chat::{Message, Sender, SUGGESTED_QUESTIONS};
use smart_travel_assistant::error::StartupError;
use smart_travel_assistant::telemetry::init_tracing;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    init_tracing("warn", config.server.log_format);
    config.client.validate()?;

    let relay = HttpChatEndpoint::new(
        HttpEndpointConfig::new(config.client.relay_url.clone()).with_timeout(config.client.timeout()),
    )?;
    let controller = InputController::new(Arc::new(relay));

    println!("✈️  Smart Travel Assistant ({})", config.client.relay_url);
    let mut shown = print_new(&controller, 0);
    print_suggestions();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.as_str();
        if line == "/quit" {
            break;
        }

        let accepted = match line.strip_prefix("/suggest ") {
            Some(n) => n
                .trim()
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .is_some_and(|index| controller.use_suggestion(index)),
            None => controller.set_input(line),
        };
        if !accepted || !controller.can_submit() {
            println!("(nothing to send)");
            continue;
        }

        let mut updates = controller.subscribe();
        updates.borrow_and_update();
        let send = controller.submit(SubmitTrigger::EnterKey { shift: false });
        tokio::pin!(send);
        loop {
            tokio::select! {
                _ = &mut send => break,
                Ok(()) = updates.changed() => {
                    shown = print_new(&controller, shown);
                    if controller.is_busy() {
                        println!("🤖 …");
                    }
                }
            }
        }
        shown = print_new(&controller, shown);
    }

    Ok(())
}

/// Prints transcript entries from `from` onward; returns the new count.
fn print_new(controller: &InputController, from: usize) -> usize {
    let snapshot = controller.snapshot();
    for message in snapshot.messages.iter().skip(from) {
        print_message(message);
    }
    snapshot.messages.len()
}

fn print_message(message: &Message) {
    let avatar = match message.sender() {
        Sender::User => "👤",
        Sender::Bot => "🤖",
    };
    println!("[{}] {} {}", message.timestamp().clock_label(), avatar, message.text());
}

fn print_suggestions() {
    println!("💡 Try asking about:");
    for (i, question) in SUGGESTED_QUESTIONS.iter().enumerate() {
        println!("  /suggest {}  {}", i + 1, question);
    }
}

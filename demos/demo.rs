//! Walk-through of the Mailosaur client against a real inbox.
//!
//! Reads `MAILOSAUR_API_KEY` and `MAILOSAUR_SERVER_ID` from the environment.

use mailosaur_client::{ClientBuilder, MessageListOptions, SearchMessagesLookup};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let client = ClientBuilder::from_env()?
        .timeout(Duration::from_secs(30))
        .build()?;
    println!("Connected to inbox {}", client.server_id());

    let email = client.generate_email();
    println!("\nSend a mail to: {email}");

    println!("\nPolling for messages (2 min max)...");
    let start = std::time::Instant::now();
    let timeout = Duration::from_secs(120);
    let lookup = SearchMessagesLookup::new().sent_to(&email);

    loop {
        let found = client
            .search_messages(&lookup, &MessageListOptions::new())
            .await?;

        if let Some(summary) = found.first() {
            let message = client.get_message(&summary.id).await?;
            let from = message
                .from
                .first()
                .and_then(|a| a.email.as_deref())
                .unwrap_or("<unknown>");
            println!("\nReceived: {} (from {from})", message.subject);
            println!("   {}", message.summary);

            client.delete_message(&message.id).await?;
            println!("Deleted message {}", message.id);
            break;
        }

        if start.elapsed() >= timeout {
            println!("\nTimeout: no message received after 2 minutes");
            break;
        }

        tokio::time::sleep(Duration::from_secs(5)).await;
    }

    let remaining = client.list_messages(&MessageListOptions::new()).await?;
    println!("\n{} message(s) left in the inbox", remaining.len());

    Ok(())
}

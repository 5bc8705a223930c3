use std::time::Duration;

use mongodb::{Client, Database, bson::doc, options::ClientOptions};
use tokio::time::sleep;
use tracing::{debug, warn};

use super::error::{MongoDaoError, MongoResult};

/// Bounded exponential backoff between startup pings.
#[derive(Debug, Clone, Copy)]
struct PingBackoff {
    attempt: u32,
    max_attempts: u32,
    delay: Duration,
    max_delay: Duration,
}

impl Default for PingBackoff {
    fn default() -> Self {
        Self {
            attempt: 0,
            max_attempts: 10,
            delay: Duration::from_millis(250),
            max_delay: Duration::from_secs(5),
        }
    }
}

impl PingBackoff {
    /// Record a failed attempt; returns how long to wait, or `None` once attempts run out.
    fn failed(&mut self) -> Option<Duration> {
        self.attempt += 1;
        if self.attempt >= self.max_attempts {
            return None;
        }
        let wait = self.delay;
        self.delay = (self.delay * 2).min(self.max_delay);
        Some(wait)
    }
}

/// Build a client for `database_name` and wait until the server answers a ping.
pub async fn establish_connection(
    options: &ClientOptions,
    database_name: &str,
) -> MongoResult<(Client, Database)> {
    let client = Client::with_options(options.clone())
        .map_err(|source| MongoDaoError::ClientConstruction { source })?;
    let database = client.database(database_name);

    wait_for_ping(&database, PingBackoff::default()).await?;
    Ok((client, database))
}

async fn wait_for_ping(database: &Database, mut backoff: PingBackoff) -> MongoResult<()> {
    loop {
        let source = match database.run_command(doc! { "ping": 1 }).await {
            Ok(_) => {
                debug!(database = database.name(), "MongoDB answered ping");
                return Ok(());
            }
            Err(source) => source,
        };

        let Some(wait) = backoff.failed() else {
            return Err(MongoDaoError::InitialPing {
                attempts: backoff.attempt,
                source,
            });
        };
        warn!(attempt = backoff.attempt, error = %source, ?wait, "MongoDB not reachable yet");
        sleep(wait).await;
    }
}

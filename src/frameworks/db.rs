use mongodb::bson::doc;
use mongodb::{Client, Database};

// Database used when the connection string does not name one.
const DEFAULT_DATABASE_NAME: &str = "restaurant";

// Parse the URI and hand back a lazy database handle. The driver only
// contacts the deployment on the first operation, so this fails fast on a
// malformed URI and on nothing else.
pub async fn open(uri: &str) -> Result<Database, mongodb::error::Error> {
    let client = Client::with_uri_str(uri).await?;
    Ok(client
        .default_database()
        .unwrap_or_else(|| client.database(DEFAULT_DATABASE_NAME)))
}

// Single connectivity check. No retry: the driver re-selects a server on
// every operation, so a failure here only means handlers hit the same error
// until the deployment becomes reachable.
pub async fn ping(db: &Database) -> Result<(), mongodb::error::Error> {
    db.run_command(doc! { "ping": 1 }).await?;
    Ok(())
}

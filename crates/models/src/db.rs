use mongodb::{Client, Database};

/// Connect to MongoDB and select the application database.
///
/// The connection target is an explicit parameter rather than process-global
/// state so that callers can stand up isolated instances side by side.
pub async fn connect(url: &str, database: &str) -> anyhow::Result<Database> {
    let client = Client::with_uri_str(url).await?;
    Ok(client.database(database))
}

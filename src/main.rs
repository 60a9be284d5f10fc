use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    docqa::run().await
}

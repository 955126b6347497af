// Dog shelter API server
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    shelter_lib::run().await
}

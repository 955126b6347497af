use shelter_lib::log_error;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    match shelter_lib::seed().await {
        Ok(report) => {
            println!(
                "Seeded {} breeds and {} dogs",
                report.breeds.added, report.dogs.added
            );
            Ok(())
        }
        Err(e) => {
            log_error!("Error during database seeding: {}", e);
            Err(e)
        }
    }
}

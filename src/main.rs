use tracing::error;

#[tokio::main]
async fn main() {
    if let Err(e) = tenancy_backend::run().await {
        error!("{}", e);
        eprintln!("tenancy-backend failed: {}", e);
        std::process::exit(1);
    }
}

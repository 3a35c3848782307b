use foodgram::{app, bootstrap};
use tracing::info;

#[tokio::main]
async fn main() {
    let (config, foodgram) = bootstrap::app::setup();

    let jobs = app::start(&config, foodgram).await;

    // handle the signals
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Foodgram shutting down...");

            // Await for all jobs to shutdown
            futures::future::join_all(jobs).await;
            info!("Foodgram successfully shutdown.");
        }
    }
}

use stockroom::console::{self, Terminal};
use stockroom::lifecycle::{App, AppConfig};
use store_framework::tracing::setup_tracing;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr; stdout belongs to the screens
    setup_tracing();

    let config = AppConfig::from_env();
    info!(?config, "Configuration loaded");

    // Stdin is blocking, and confirm prompts read it from inside command handlers
    tokio::task::spawn_blocking(move || {
        let mut app = App::new(&config);
        let terminal = Terminal::new(std::io::BufReader::new(std::io::stdin()), std::io::stdout());
        console::run(&mut app, &terminal)
    })
    .await??;

    info!("Application completed successfully");
    Ok(())
}

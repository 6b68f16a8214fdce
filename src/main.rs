use incursion_bot::bot::{config::Config, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = startup::init_logging(&config) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    let bot_config = match startup::load_bot_config(&config) {
        Ok(bot_config) => bot_config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let esi_client = match startup::build_esi_client(&config).await {
        Ok(esi_client) => esi_client,
        Err(e) => {
            eprintln!("Failed to build ESI client: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = startup::run_discord(bot_config, esi_client).await {
        eprintln!("Discord client error: {}", e);
        std::process::exit(1);
    }
}

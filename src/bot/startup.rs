//! Process startup: logging, cache connection, ESI client and the Discord client.

use dioxus_logger::tracing;
use fred::prelude::{ClientLike, Pool};
use serenity::all::{Client, GatewayIntents};

use crate::bot::{
    config::{BotConfig, Config},
    controller::dispatch::Dispatcher,
    discord::Handler,
    error::{config::ConfigError, Error},
    esi::{cache::ResponseCache, EsiClient},
};

/// Initialize logging at the configured level
pub fn init_logging(config: &Config) -> Result<(), ConfigError> {
    let level = match config.log_level.as_str() {
        "error" => tracing::Level::ERROR,
        "warn" => tracing::Level::WARN,
        "debug" => tracing::Level::DEBUG,
        "trace" => tracing::Level::TRACE,
        _ => tracing::Level::INFO,
    };

    dioxus_logger::init(level).map_err(|e| ConfigError::InvalidEnvValue {
        var: "LOG_LEVEL".to_string(),
        reason: e.to_string(),
    })
}

/// Connect to Valkey/Redis for the ESI response cache
pub async fn connect_to_cache(cache_url: &str) -> Result<Pool, Error> {
    let redis_config = fred::prelude::Config::from_url(cache_url)?;
    let pool = Pool::new(redis_config, None, None, None, 2)?;

    pool.connect();
    pool.wait_for_connect().await?;

    Ok(pool)
}

/// Build the ESI client, reading through the cache when one is configured
pub async fn build_esi_client(config: &Config) -> Result<EsiClient, Error> {
    let mut builder = EsiClient::builder().user_agent(&config.user_agent);

    if let Some(esi_url) = &config.esi_url {
        builder = builder.esi_url(esi_url);
    }

    if let Some(cache_url) = &config.cache_url {
        let pool = connect_to_cache(cache_url).await?;
        builder = builder.cache(ResponseCache::new(pool));

        tracing::info!("Caching ESI responses in {}", cache_url);
    }

    Ok(builder.build()?)
}

/// Load the bot configuration file named by the environment configuration
pub fn load_bot_config(config: &Config) -> Result<BotConfig, Error> {
    let bot_config = BotConfig::from_file(&config.config_path)?;

    tracing::info!(
        "Loaded bot configuration from {} ({} approved channels, {} home systems)",
        config.config_path,
        bot_config.approved_channels.len(),
        bot_config.home_systems.len()
    );

    Ok(bot_config)
}

/// Connect to Discord and handle messages until a shutdown signal is received
pub async fn run_discord(bot_config: BotConfig, esi_client: EsiClient) -> Result<(), Error> {
    let intents = GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let token = bot_config.token.clone();
    let dispatcher = Dispatcher::new(bot_config, esi_client);

    let mut client = Client::builder(&token, intents)
        .event_handler(Handler::new(dispatcher))
        .await?;

    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, closing Discord connection");
        shard_manager.shutdown_all().await;
    });

    tracing::info!("Bot is now running, press CTRL-C to exit");
    client.start().await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for CTRL-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

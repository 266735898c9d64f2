use std::path::PathBuf;

use clap::Parser;
use tictactoe_common::config::{ConfigManager, FileContentConfigProvider, Validate};
use tictactoe_common::games::SessionRng;
use tictactoe_common::{log, logger};
use tictactoe_server::game_session::GameSession;
use tictactoe_server::server_config::{GameMode, ServerConfig};
use tictactoe_server::web_server::{run_web_server, WebServerState};

#[derive(Parser)]
#[command(name = "tictactoe_server")]
struct Args {
    #[arg(long, default_value = "tictactoe_server.yaml")]
    config: PathBuf,

    #[arg(long)]
    use_log_prefix: bool,

    /// Overrides `bind_address` from the config file.
    #[arg(long)]
    bind: Option<String>,

    #[arg(long, value_enum)]
    mode: Option<GameMode>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Server".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager: ConfigManager<FileContentConfigProvider, ServerConfig> =
        ConfigManager::from_yaml_file(&args.config);
    let mut config = config_manager.get_config()?;

    if let Some(bind) = args.bind {
        config.bind_address = bind;
    }
    if let Some(mode) = args.mode {
        config.mode = mode;
    }
    config.validate()?;

    let rng = config
        .rng_seed
        .map(SessionRng::new)
        .unwrap_or_else(SessionRng::from_random);
    log!("Starting {:?} game, rng seed {}", config.mode, rng.seed());

    let session = GameSession::new(config.mode, config.reset_defaults(), rng);
    let state = WebServerState::new(session);

    run_web_server(config.socket_addr()?, state).await?;

    log!("Server shut down gracefully");

    Ok(())
}

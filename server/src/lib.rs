pub mod game_session;
pub mod server_config;
pub mod web_server;

pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod prometheus;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    action_response::ActionResponse,
    auto_restart_request::AutoRestartRequest,
    bot_request::BotRequest,
    bots::{restart_bot, start_bot, stop_bot},
    error::ApiError,
    error::Result as ApiResult,
    fleet::{list_bots, list_servers},
    monitoring::{get_status, set_auto_restart, start_monitoring, stop_monitoring},
    server_bots_dto::ServerBotsDto,
    switch_response::SwitchResponse,
    switch_server_request::SwitchServerRequest,
    switching::switch_server,
};
pub use app_state::AppState;
pub use error::{Result as ServerResult, ServerError};

pub use crate::routes::build_router;

//! Per-bot command handlers

use crate::api::body::{parse_body, require};
use crate::{ActionResponse, ApiError, ApiResult, AppState, BotRequest};

use axum::{Json, body::Bytes, extract::State};

/// Which command a bot handler runs
#[derive(Debug, Clone, Copy)]
enum BotCommand {
    Start,
    Stop,
    Restart,
}

impl BotCommand {
    fn verb(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Restart => "restart",
        }
    }

    fn past(self) -> &'static str {
        match self {
            Self::Start => "started",
            Self::Stop => "stopped",
            Self::Restart => "restarted",
        }
    }
}

/// POST /api/start_bot
pub async fn start_bot(State(state): State<AppState>, body: Bytes) -> ApiResult<Json<ActionResponse>> {
    run(&state, &body, BotCommand::Start).await
}

/// POST /api/stop_bot
pub async fn stop_bot(State(state): State<AppState>, body: Bytes) -> ApiResult<Json<ActionResponse>> {
    run(&state, &body, BotCommand::Stop).await
}

/// POST /api/restart_bot
pub async fn restart_bot(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<ActionResponse>> {
    run(&state, &body, BotCommand::Restart).await
}

async fn run(state: &AppState, body: &Bytes, command: BotCommand) -> ApiResult<Json<ActionResponse>> {
    let request: BotRequest = parse_body(body)?;
    let server = require(request.server, "server")?;
    let bot_id = require(request.bot_id, "bot_id")?;

    let coordinator = &state.coordinator;
    let succeeded = match command {
        BotCommand::Start => coordinator.start_bot(&server, &bot_id).await?,
        BotCommand::Stop => coordinator.stop_bot(&server, &bot_id).await?,
        BotCommand::Restart => coordinator.restart_bot(&server, &bot_id).await?,
    };

    if !succeeded {
        return Err(ApiError::agent(format!(
            "Failed to {} bot {bot_id} on server {server}",
            command.verb()
        )));
    }

    Ok(Json(ActionResponse::ok(format!(
        "Bot {bot_id} {} on server {server}",
        command.past()
    ))))
}

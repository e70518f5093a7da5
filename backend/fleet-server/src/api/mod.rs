pub mod action_response;
pub mod auto_restart_request;
pub mod body;
pub mod bot_request;
pub mod bots;
pub mod error;
pub mod fleet;
pub mod monitoring;
pub mod server_bots_dto;
pub mod switch_response;
pub mod switch_server_request;
pub mod switching;

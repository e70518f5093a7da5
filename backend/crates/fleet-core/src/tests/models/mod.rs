mod bot_runtime_status;
mod fleet;
mod health_state;
mod server_status;
mod switch_policy;

use crate::{BotDescriptor, ServerDescriptor};

use std::collections::BTreeMap;

pub(crate) fn server(key: &str, id: u32, is_primary: bool) -> ServerDescriptor {
    let mut bots = BTreeMap::new();
    bots.insert(
        "bot1".to_string(),
        BotDescriptor::new("Bot 1", "python bot1.py", "pkill -f bot1.py", "bot1.py"),
    );

    ServerDescriptor {
        key: key.to_string(),
        id,
        name: format!("Server {}", id),
        agent_url: format!("http://{}:5001", key),
        root_path: "/srv/bots".to_string(),
        is_primary,
        bots,
    }
}

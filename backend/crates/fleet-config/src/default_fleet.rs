use std::collections::BTreeMap;

use fleet_core::{BotDescriptor, ServerDescriptor};

const DEFAULT_BOT_COUNT: u32 = 4;

/// The fleet used when no `[[servers]]` are configured: a primary and one
/// backup, each running the same four bots.
pub fn default_servers() -> Vec<ServerDescriptor> {
    vec![
        default_server("server1", 1, "http://server1:5001", true),
        default_server("server2", 2, "http://server2:5002", false),
    ]
}

fn default_server(key: &str, id: u32, agent_url: &str, is_primary: bool) -> ServerDescriptor {
    let bots: BTreeMap<String, BotDescriptor> = (1..=DEFAULT_BOT_COUNT)
        .map(|n| {
            (
                format!("bot{n}"),
                BotDescriptor::new(
                    format!("Bot {n}"),
                    format!("cd /path/to/bot{n} && python bot{n}.py"),
                    format!("pkill -f bot{n}.py"),
                    format!("bot{n}.py"),
                ),
            )
        })
        .collect();

    ServerDescriptor {
        key: key.to_string(),
        id,
        name: format!("Server {id}"),
        agent_url: agent_url.to_string(),
        root_path: String::new(),
        is_primary,
        bots,
    }
}

use std::collections::BTreeMap;
use std::time::Duration;

use fleet_core::{ServerDescriptor, ServerStatus};

/// First server in failover order that is online with all bots running.
/// Returns its position in `order` with it. Unpolled servers never qualify.
pub fn select_candidate<'a>(
    order: &[&'a ServerDescriptor],
    statuses: &BTreeMap<String, ServerStatus>,
) -> Option<(usize, &'a ServerDescriptor)> {
    order
        .iter()
        .enumerate()
        .find(|(_, server)| {
            statuses
                .get(&server.key)
                .is_some_and(ServerStatus::qualifies_for_promotion)
        })
        .map(|(index, server)| (index, *server))
}

/// Operator-facing announcement for promoting `order[index]`.
pub fn transition_message(order: &[&ServerDescriptor], index: usize, delay: Duration) -> String {
    let when = announce_delay(delay);
    let Some(target) = order.get(index) else {
        return format!("Switching active server {when}...");
    };

    match index {
        0 => format!("Switching back to primary server {} {when}...", target.name),
        1 => format!(
            "Primary server unavailable. Switching to backup server 2: {} {when}...",
            target.name
        ),
        _ => {
            let skipped: Vec<String> = (2..=index).map(|rank| rank.to_string()).collect();
            format!(
                "Primary and backup {} unavailable. Switching to backup server {}: {} {when}...",
                skipped.join(", "),
                index + 1,
                target.name
            )
        }
    }
}

fn announce_delay(delay: Duration) -> String {
    let secs = delay.as_secs();
    match secs {
        0 => String::from("now"),
        60 => String::from("in 1 minute"),
        s if s % 60 == 0 => format!("in {} minutes", s / 60),
        s => format!("in {s} seconds"),
    }
}

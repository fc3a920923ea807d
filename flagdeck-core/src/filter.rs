//! Substring predicates backing the console's search boxes.
//!
//! All matching is case-insensitive and an empty term matches
//! everything, so clearing a filter restores every row. Filtering
//! never reorders the backing list; the views only toggle visibility.

use flagdeck_model::{CommandDescriptor, FlagEntry, Room, UserSummary};

use crate::sort::full_name;

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// User-list filter: matches on username or the synthesized full name.
pub fn user_matches(user: &UserSummary, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    contains(&user.username, &term) || full_name(user).contains(&term)
}

/// Flag-cloud filter on the user detail view.
pub fn flag_matches(entry: &FlagEntry, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    term.is_empty() || contains(&entry.flag, &term)
}

/// Sandbox catalogue filter: matches on name or description.
pub fn command_matches(command: &CommandDescriptor, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    contains(&command.name, &term)
        || command
            .description
            .as_deref()
            .is_some_and(|d| contains(d, &term))
}

/// Teleport-grid filter: matches on room name or id.
pub fn room_matches(room: &Room, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    contains(&room.id, &term) || room.name.as_deref().is_some_and(|n| contains(n, &term))
}

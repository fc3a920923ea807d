//! The comparator engine behind the sortable user table.
//!
//! Sorting is stable and direction-aware. Missing values (absent,
//! empty, or the backend's literal `"N/A"` placeholder) compare equal
//! to each other and are pinned to one end of the list determined
//! solely by the direction: before real values ascending, after them
//! descending.

use std::cmp::Ordering;

use flagdeck_model::UserSummary;

/// A sortable column of the user table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Username,
    /// Synthetic key: first and last name joined, lower-cased, trimmed.
    Name,
    Filiere,
    FlagCount,
    Blocked,
}

impl SortKey {
    pub fn all() -> &'static [SortKey] {
        use SortKey::*;
        &[Username, Name, Filiere, FlagCount, Blocked]
    }

    /// Column label shown in the table header.
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Username => "Username",
            SortKey::Name => "Name",
            SortKey::Filiere => "Track",
            SortKey::FlagCount => "Flags",
            SortKey::Blocked => "Status",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// The current (key, direction) pair of the user table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortState {
    /// State after a header click: clicking the already-ascending key
    /// flips to descending, every other click lands on ascending.
    pub fn toggled(self, key: SortKey) -> SortState {
        let direction = if key == self.key && self.direction == SortDirection::Asc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        SortState { key, direction }
    }
}

/// Sort the backing list in place. Stable, so records comparing equal
/// keep their relative order and repeated application is idempotent.
pub fn sort_users(users: &mut [UserSummary], state: SortState) {
    users.sort_by(|a, b| {
        let ordering = compare(a, b, state.key);
        match state.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

/// Synthetic full name used by the `Name` key and the list filter.
pub fn full_name(user: &UserSummary) -> String {
    let first = user.first_name.as_deref().unwrap_or("");
    let last = user.last_name.as_deref().unwrap_or("");
    format!("{first} {last}").trim().to_lowercase()
}

/// Ascending comparison for one key; direction is applied by the
/// caller as a plain reversal, which is what pins missing values.
fn compare(a: &UserSummary, b: &UserSummary, key: SortKey) -> Ordering {
    match (sort_value(a, key), sort_value(b, key)) {
        (SortValue::Missing, SortValue::Missing) => Ordering::Equal,
        (SortValue::Missing, _) => Ordering::Less,
        (_, SortValue::Missing) => Ordering::Greater,
        (SortValue::Number(x), SortValue::Number(y)) => x.cmp(&y),
        (SortValue::Flag(x), SortValue::Flag(y)) => x.cmp(&y),
        (SortValue::Text(x), SortValue::Text(y)) => x.cmp(&y),
        // Keys extract a single variant, so mixed pairs cannot occur.
        _ => Ordering::Equal,
    }
}

enum SortValue {
    Missing,
    Text(String),
    Number(i64),
    Flag(bool),
}

fn sort_value(user: &UserSummary, key: SortKey) -> SortValue {
    match key {
        SortKey::Username => text_value(Some(&user.username)),
        SortKey::Name => {
            let name = full_name(user);
            text_value(Some(&name))
        }
        SortKey::Filiere => text_value(user.filiere.as_deref()),
        SortKey::FlagCount => SortValue::Number(user.flag_count),
        SortKey::Blocked => match user.blocked {
            Some(b) => SortValue::Flag(b),
            None => SortValue::Missing,
        },
    }
}

fn text_value(raw: Option<&str>) -> SortValue {
    match raw {
        None => SortValue::Missing,
        Some(s) if s.is_empty() || s == "N/A" => SortValue::Missing,
        Some(s) => SortValue::Text(s.to_lowercase()),
    }
}

/// Case-insensitive ordering of rooms by display label, applied before
/// the teleport grid is rendered.
pub fn sort_rooms(rooms: &mut [flagdeck_model::Room]) {
    rooms.sort_by_key(|room| room.label().to_lowercase());
}

//! All mutable application state, owned by the runtime and threaded
//! through `update`/`view`. No module-level globals: everything the
//! old web client kept in closure-captured variables lives here.

use std::collections::HashMap;
use std::fmt;

use iced::Task;
use iced::widget::text_editor;

use flagdeck_core::SortState;
use flagdeck_model::{CommandDescriptor, CompareResult, Room, Stats, UserDetail, UserSummary};

use crate::config::{AppConfig, Prefs};
use crate::infrastructure::api_client::ApiClient;
use crate::message::Message;
use crate::router::Route;

/// Which view fills the content region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    Users,
    UserDetail { username: String },
    Compare,
    Sandbox,
    NotFound { fragment: String },
    /// A route fetch failed; the message already carries the HTTP
    /// status when one was available.
    Failed { message: String },
}

/// One line of feedback in a local status area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusLine {
    Info(String),
    Success(String),
    Error(String),
}

#[derive(Debug, Default)]
pub struct DashboardPane {
    pub stats: Option<Stats>,
}

#[derive(Debug, Default)]
pub struct UsersPane {
    /// Backing list; sorting mutates it in place and the view
    /// regenerates rows from it, keeping rows index-aligned.
    pub list: Vec<UserSummary>,
    pub sort: SortState,
    pub filter: String,
}

#[derive(Debug, Default)]
pub struct DetailPane {
    pub data: Option<UserDetail>,
    pub flag_filter: String,
}

/// Which of the two compare pickers a message targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerSlot {
    First,
    Second,
}

/// A searchable single-select input over the user list.
#[derive(Debug, Default)]
pub struct PickerState {
    pub input: String,
    pub selected: Option<String>,
    pub open: bool,
}

#[derive(Debug, Default)]
pub struct ComparePane {
    pub users: Vec<UserSummary>,
    pub first: PickerState,
    pub second: PickerState,
    pub busy: bool,
    pub error: Option<String>,
    pub result: Option<CompareResult>,
}

impl ComparePane {
    pub fn picker(&self, slot: PickerSlot) -> &PickerState {
        match slot {
            PickerSlot::First => &self.first,
            PickerSlot::Second => &self.second,
        }
    }

    pub fn picker_mut(&mut self, slot: PickerSlot) -> &mut PickerState {
        match slot {
            PickerSlot::First => &mut self.first,
            PickerSlot::Second => &mut self.second,
        }
    }
}

/// Expansion/execution lifecycle of one sandbox card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardPhase {
    #[default]
    Collapsed,
    Expanded,
    Executing,
}

/// Rendered result of the last execution attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardOutcome {
    Success(String),
    Failure(String),
}

#[derive(Default)]
pub struct CardState {
    pub phase: CardPhase,
    /// Raw text of single-line inputs, keyed by parameter name.
    pub inputs: HashMap<String, String>,
    /// Editor buffers for multi-line JSON parameters.
    pub json_inputs: HashMap<String, text_editor::Content>,
    /// Parameter flagged by the last failed validation.
    pub invalid_field: Option<String>,
    pub outcome: Option<CardOutcome>,
}

impl fmt::Debug for CardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardState")
            .field("phase", &self.phase)
            .field("invalid_field", &self.invalid_field)
            .field("outcome", &self.outcome)
            .finish_non_exhaustive()
    }
}

/// Tri-state choice for optional boolean parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoolChoice {
    Unset,
    True,
    False,
}

impl BoolChoice {
    pub const ALL: [BoolChoice; 3] = [BoolChoice::Unset, BoolChoice::True, BoolChoice::False];

    /// The raw value stored in the card's input map.
    pub fn as_input(self) -> &'static str {
        match self {
            BoolChoice::Unset => "",
            BoolChoice::True => "true",
            BoolChoice::False => "false",
        }
    }

    pub fn from_input(raw: &str) -> BoolChoice {
        match raw {
            "true" => BoolChoice::True,
            "false" => BoolChoice::False,
            _ => BoolChoice::Unset,
        }
    }
}

impl fmt::Display for BoolChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BoolChoice::Unset => "(optional)",
            BoolChoice::True => "true",
            BoolChoice::False => "false",
        };
        write!(f, "{label}")
    }
}

#[derive(Debug, Default)]
pub struct SandboxPane {
    pub commands: Vec<CommandDescriptor>,
    pub filter: String,
    pub cards: HashMap<String, CardState>,
}

#[derive(Debug, Default)]
pub struct TeleportPane {
    pub world_id_input: String,
    /// World id used for the last room search; teleports reuse it.
    pub last_world_id: Option<String>,
    pub rooms: Vec<Room>,
    /// Whether a search has completed at least once, which switches
    /// the empty grid from a hint to a "nothing found" message.
    pub searched: bool,
    pub filter: String,
    pub searching: bool,
    /// Room id of an in-flight teleport; disables the whole grid.
    pub teleporting: Option<String>,
    pub status: Option<StatusLine>,
}

#[derive(Debug, Default)]
pub struct MaintenancePane {
    pub db_busy: bool,
    pub db_status: Option<StatusLine>,
    pub worlds_busy: bool,
    pub worlds_status: Option<StatusLine>,
}

pub struct State {
    pub api: ApiClient,
    pub prefs: Prefs,
    pub notes: text_editor::Content,
    pub route: Route,
    /// Global loading indicator, owned by the router: set on
    /// navigation, cleared when the route's fetch resolves either way.
    pub loading: bool,
    pub screen: Screen,
    pub dashboard: DashboardPane,
    pub users: UsersPane,
    pub detail: DetailPane,
    pub compare: ComparePane,
    pub sandbox: SandboxPane,
    pub teleport: TeleportPane,
    pub maintenance: MaintenancePane,
}

impl State {
    pub fn new(config: &AppConfig) -> Self {
        let prefs = Prefs::load();
        let notes = text_editor::Content::with_text(&prefs.notes);
        Self {
            api: ApiClient::new(&config.server_url),
            prefs,
            notes,
            route: Route::Dashboard,
            loading: false,
            screen: Screen::Dashboard,
            dashboard: DashboardPane::default(),
            users: UsersPane::default(),
            detail: DetailPane::default(),
            compare: ComparePane::default(),
            sandbox: SandboxPane::default(),
            teleport: TeleportPane::default(),
            maintenance: MaintenancePane::default(),
        }
    }

    pub fn title(&self) -> String {
        format!("Flagdeck — {}", self.route.title())
    }
}

/// Initial state plus the task that loads the landing route.
pub fn boot(config: AppConfig) -> (State, Task<Message>) {
    let state = State::new(&config);
    (state, Task::done(Message::Navigate(Route::Dashboard)))
}

use crate::fetch::{FetchErrorKind, FetchResult};
use crate::projection::{project, DateStyle, ViewModel};
use crate::resource::{ResourceKind, ResourceState};
use crate::ui::mvi::Reducer;
use crate::ui::team_detail::{TeamDetailIntent, TeamDetailReducer, TeamDetailState};
use crate::ui::view::{ViewIntent, ViewReducer, ViewState};
use tokio::sync::mpsc;
use tokio_util::sync::{CancellationToken, DropGuard};

/// Work the UI thread hands to the async side.
#[derive(Debug)]
pub enum UiCommand {
    /// Start a lifecycle for `kind`; it must stop once `scope` is cancelled.
    Fetch {
        kind: ResourceKind,
        generation: u64,
        scope: CancellationToken,
    },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    origin: String,
    date_style: DateStyle,
    /// Active collection and its lifecycle result (MVI pattern).
    view: ViewState,
    /// Team detail popup (MVI pattern).
    team_detail: TeamDetailState,
    last_generation: u64,
    /// Dropping the guard cancels the active lifecycle.
    active_scope: Option<DropGuard>,
    command_sender: Option<UiCommandSender>,
    spinner_frame: usize,
}

impl App {
    pub fn new(origin: impl Into<String>, date_style: DateStyle) -> Self {
        Self {
            should_quit: false,
            origin: origin.into(),
            date_style,
            view: ViewState::default(),
            team_detail: TeamDetailState::default(),
            last_generation: 0,
            active_scope: None,
            command_sender: None,
            spinner_frame: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Quitting also cancels whatever is still in flight.
    pub fn request_quit(&mut self) {
        self.should_quit = true;
        self.active_scope = None;
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn date_style(&self) -> &DateStyle {
        &self.date_style
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn team_detail(&self) -> &TeamDetailState {
        &self.team_detail
    }

    pub fn view_model(&self) -> ViewModel {
        project(&self.view.resource, &self.date_style)
    }

    pub fn spinner_frame(&self) -> usize {
        self.spinner_frame
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    /// Starts a fresh lifecycle for `kind`, cancelling the previous one.
    pub fn activate(&mut self, kind: ResourceKind) {
        self.last_generation += 1;
        let generation = self.last_generation;
        let scope = CancellationToken::new();
        // Replacing the guard cancels the old scope before the new request goes out.
        self.active_scope = Some(scope.clone().drop_guard());

        self.dispatch_team_detail(TeamDetailIntent::Close);
        self.dispatch_view(ViewIntent::Activate { kind, generation });
        tracing::debug!(resource = kind.name(), generation, "Activated view");

        let sent = self.send_command(UiCommand::Fetch {
            kind,
            generation,
            scope,
        });
        // Nothing will ever settle this generation, so fail it here.
        if let Err(message) = sent {
            self.on_fetch_settled(
                generation,
                ResourceState::failed(kind, FetchErrorKind::Configuration, message),
            );
        }
    }

    /// Switches to `kind`; selecting the view already shown is a no-op.
    pub fn switch_to(&mut self, kind: ResourceKind) {
        if self.last_generation == 0 || self.view.kind() != kind {
            self.activate(kind);
        }
    }

    pub fn next_view(&mut self) {
        self.switch_to(self.view.kind().next());
    }

    pub fn previous_view(&mut self) {
        self.switch_to(self.view.kind().previous());
    }

    pub fn reload(&mut self) {
        self.activate(self.view.kind());
    }

    pub fn move_selection(&mut self, delta: isize) {
        self.dispatch_view(ViewIntent::MoveSelection { delta });
    }

    /// Opens the popup for the highlighted team. Only works once teams loaded.
    pub fn open_team_detail(&mut self) {
        let ResourceState::Teams(FetchResult::Succeeded { items }) = &self.view.resource else {
            return;
        };
        let Some(team) = items.get(self.view.selected).cloned() else {
            return;
        };
        self.dispatch_team_detail(TeamDetailIntent::Open { team });
    }

    pub fn close_team_detail(&mut self) {
        self.dispatch_team_detail(TeamDetailIntent::Close);
    }

    pub fn on_fetch_settled(&mut self, generation: u64, resource: ResourceState) {
        if generation != self.view.generation {
            tracing::debug!(
                generation,
                current = self.view.generation,
                "Ignoring result of a superseded fetch"
            );
        }
        self.dispatch_view(ViewIntent::Settled {
            generation,
            resource,
        });
        if self.view.generation == generation && !self.view.is_loading() {
            self.active_scope = None;
        }
    }

    pub fn on_tick(&mut self) {
        if self.view.is_loading() {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
    }

    fn dispatch_view(&mut self, intent: ViewIntent) {
        dispatch_mvi!(self, view, ViewReducer, intent);
    }

    fn dispatch_team_detail(&mut self, intent: TeamDetailIntent) {
        dispatch_mvi!(self, team_detail, TeamDetailReducer, intent);
    }

    /// Without a sender the command is dropped; only a failed send is an error.
    fn send_command(&self, command: UiCommand) -> Result<(), String> {
        let Some(sender) = &self.command_sender else {
            return Ok(());
        };

        sender.try_send(command).map_err(|err| {
            tracing::warn!("UI command send failed: {err}");
            format!("Command send failed: {err}")
        })
    }
}

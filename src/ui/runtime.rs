use crate::config::UiConfig;
use crate::fetch::{ResourceClient, ResourceController};
use crate::resource::{
    Activity, LeaderboardEntry, ResourceItem, ResourceKind, Team, User, Workout,
};
use crate::ui::app::{App, UiCommand};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc as std_mpsc;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

const COMMAND_BUFFER: usize = 16;

/// Runs the terminal UI until the user quits.
///
/// The UI loop stays on the calling thread; fetches run on `runtime`.
pub fn run(
    client: ResourceClient,
    ui: &UiConfig,
    initial: ResourceKind,
    runtime: &Handle,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = ui.tick_rate();
    let events = EventHandler::new(tick_rate);

    let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);
    let launcher = FetchLauncher {
        client: client.clone(),
        events: events.sender(),
    };
    let commands = runtime.spawn(serve_commands(command_rx, launcher));

    let mut app = App::new(client.origin().as_str(), ui.date_style().unwrap_or_default());
    app.set_command_sender(command_tx);
    app.switch_to(initial);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::FetchSettled {
                generation,
                resource,
            }) => app.on_fetch_settled(generation, resource),
            Err(std_mpsc::RecvTimeoutError::Timeout) => {}
            Err(std_mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    // Dropping the app cancels the in-flight scope and closes the command channel.
    drop(app);
    commands.abort();
    drop(guard);
    Ok(())
}

async fn serve_commands(mut commands: mpsc::Receiver<UiCommand>, launcher: FetchLauncher) {
    while let Some(command) = commands.recv().await {
        match command {
            UiCommand::Fetch {
                kind,
                generation,
                scope,
            } => launcher.launch(kind, generation, &scope),
        }
    }
}

/// Starts the controller matching a collection and reports its terminal
/// result back to the UI thread.
struct FetchLauncher {
    client: ResourceClient,
    events: std_mpsc::Sender<AppEvent>,
}

impl FetchLauncher {
    fn launch(&self, kind: ResourceKind, generation: u64, scope: &CancellationToken) {
        match kind {
            ResourceKind::Activities => self.spawn::<Activity>(generation, scope),
            ResourceKind::Leaderboard => self.spawn::<LeaderboardEntry>(generation, scope),
            ResourceKind::Teams => self.spawn::<Team>(generation, scope),
            ResourceKind::Users => self.spawn::<User>(generation, scope),
            ResourceKind::Workouts => self.spawn::<Workout>(generation, scope),
        }
    }

    fn spawn<T: ResourceItem>(&self, generation: u64, scope: &CancellationToken) {
        let mut handle = ResourceController::<T>::new(self.client.clone()).start_scoped(scope);
        let events = self.events.clone();
        tokio::spawn(async move {
            // `None` means the view was left; nothing to report.
            if let Some(result) = handle.settled().await {
                let _ = events.send(AppEvent::FetchSettled {
                    generation,
                    resource: T::wrap(result),
                });
            }
        });
    }
}

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use board_logging::{board_info, board_warn};
use chrono::Utc;
use jobboard_client::{
    ClientHandle, ClientSettings, FileStore, InMemoryJobService, JobService, KeyValueStore,
    ReqwestJobService,
};
use jobboard_core::{update, AppState, Job, Msg};

use super::config::AppConfig;
use super::effects::{EffectRunner, Surfaces};
use super::logging;
use super::notify::TerminalNotifier;
use super::persistence::{load_bookmarks, load_profile};
use super::share::{NoShareTarget, StoreClipboard};
use super::ui::commands::{self, Command, HELP};
use super::ui::render::render;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Input from the terminal thread.
enum Input {
    Line(String),
    Closed,
}

pub fn run_app() -> Result<()> {
    let config = AppConfig::from_env()?;
    logging::initialize(config.log_destination);
    board_info!("Starting job board with {:?}", config);

    let store: Arc<dyn KeyValueStore> = Arc::new(
        FileStore::open(config.data_dir.clone()).context("opening local storage")?,
    );
    let client = ClientHandle::new(build_service(&config)?)?;

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let surfaces = Surfaces {
        store: store.clone(),
        notifier: Arc::new(TerminalNotifier),
        share: Arc::new(NoShareTarget),
        clipboard: Arc::new(StoreClipboard::new(store.clone())),
    };
    let runner = EffectRunner::new(client, surfaces, msg_tx);

    let mut app = App {
        state: AppState::with_site_url(config.site_url.clone()),
        runner,
        msg_rx,
    };
    app.dispatch(Msg::Restore {
        bookmarks: load_bookmarks(store.as_ref()),
        profile: load_profile(store.as_ref()),
    });
    app.dispatch(Msg::RefreshRequested);

    println!("{HELP}");
    app.run(spawn_input_thread())
}

fn build_service(config: &AppConfig) -> Result<Arc<dyn JobService>> {
    if let Some(api_url) = &config.api_url {
        board_info!("Using job API at {}", api_url);
        let service = ReqwestJobService::new(ClientSettings {
            base_url: api_url.clone(),
            request_timeout: config.request_timeout,
            ..ClientSettings::default()
        })?;
        return Ok(Arc::new(service));
    }

    let service = match &config.seed_file {
        Some(path) => InMemoryJobService::new(read_seed_file(path)?),
        None => InMemoryJobService::with_sample_jobs(),
    };
    board_info!("Using in-memory job board");
    Ok(Arc::new(service))
}

fn read_seed_file(path: &Path) -> Result<Vec<Job>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("reading seed file {:?}", path))?;
    serde_json::from_str(&content).with_context(|| format!("parsing seed file {:?}", path))
}

fn spawn_input_thread() -> mpsc::Receiver<Input> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(Input::Line(line)).is_err() {
                        return;
                    }
                }
                Err(err) => {
                    board_warn!("Failed to read input: {}", err);
                    break;
                }
            }
        }
        let _ = tx.send(Input::Closed);
    });
    rx
}

struct App {
    state: AppState,
    runner: EffectRunner,
    msg_rx: mpsc::Receiver<Msg>,
}

impl App {
    fn run(&mut self, input_rx: mpsc::Receiver<Input>) -> Result<()> {
        loop {
            for msg in self.runner.poll_client() {
                self.dispatch(msg);
            }
            while let Ok(msg) = self.msg_rx.try_recv() {
                self.dispatch(msg);
            }

            match input_rx.recv_timeout(POLL_INTERVAL) {
                Ok(Input::Line(line)) => {
                    if !self.handle_line(&line) {
                        break;
                    }
                }
                Ok(Input::Closed) | Err(mpsc::RecvTimeoutError::Disconnected) => break,
                Err(mpsc::RecvTimeoutError::Timeout) => {}
            }
        }
        board_info!("Shutting down");
        Ok(())
    }

    /// Returns false when the user asked to quit.
    fn handle_line(&mut self, line: &str) -> bool {
        match commands::parse(line, Utc::now().timestamp_millis()) {
            Ok(None) => {}
            Ok(Some(Command::Quit)) => return false,
            Ok(Some(Command::Help)) => println!("{HELP}"),
            Ok(Some(Command::Show)) => self.print_view(),
            Ok(Some(Command::Dispatch(msgs))) => {
                for msg in msgs {
                    self.dispatch(msg);
                }
            }
            Ok(Some(Command::EditProfile(edit))) => {
                let profile = edit.apply(self.state.profile());
                self.dispatch(Msg::ProfileUpdated(profile));
            }
            Err(err) => println!("{err}"),
        }
        true
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;
        self.runner.run(effects);
        if was_dirty {
            self.print_view();
        }
    }

    fn print_view(&self) {
        let mut out = io::stdout().lock();
        let _ = writeln!(out, "\n{}", render(&self.state.view()));
        let _ = out.flush();
    }
}

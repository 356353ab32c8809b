use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::JoinHandle;

use log::{debug, info};

use crate::engine::game_engine::GameEngine;
use crate::engine::oracle::SemanticOracle;
use crate::engine::protocol::{EngineCommand, EngineResponse};
use crate::model::event_result::EventApplyOutcome;
use crate::model::game_state::GameState;

/// Command loop around a [`GameEngine`].
///
/// Commands run one at a time in arrival order, so a hint and a hop
/// submission can never race for the same slot.
pub struct Engine<O> {
    rx: Receiver<EngineCommand>,
    tx: Sender<EngineResponse>,
    game: GameEngine<O>,
}

impl<O: SemanticOracle> Engine<O> {
    pub fn new(
        rx: Receiver<EngineCommand>,
        tx: Sender<EngineResponse>,
        mut game: GameEngine<O>,
    ) -> Self {
        let progress = tx.clone();
        game.set_observer(Box::new(move |state: &GameState| {
            let _ = progress.send(EngineResponse::StateChanged(state.clone()));
        }));

        Self { rx, tx, game }
    }

    pub fn run(&mut self) {
        info!("engine started");

        while let Ok(cmd) = self.rx.recv() {
            if cmd == EngineCommand::Shutdown {
                break;
            }

            let command = cmd.short_name();
            debug!("command {}", command);
            let outcome = self.handle(cmd);

            let response = EngineResponse::Applied {
                command,
                outcome,
                state: self.game.state().clone(),
            };
            if self.tx.send(response).is_err() {
                break;
            }
        }

        info!("engine stopped");
    }

    fn handle(&mut self, cmd: EngineCommand) -> EventApplyOutcome {
        match cmd {
            EngineCommand::StartPuzzle { seed_word } => self.game.start_puzzle(seed_word.as_deref()),
            EngineCommand::SubmitHop { index, guess } => self.game.submit_hop(index, &guess),
            EngineCommand::RequestHint => self.game.request_hint(),
            EngineCommand::RequestSolution => self.game.request_solution(),
            EngineCommand::UndoLastStep => self.game.undo_last_step(),
            EngineCommand::ResetGame { full } => self.game.reset_game(full),
            EngineCommand::StartNextLevel => self.game.start_next_level(),
            EngineCommand::Snapshot | EngineCommand::Shutdown => EventApplyOutcome::Applied,
        }
    }
}

/// Channels to an engine running on its own thread.
pub struct EngineHandle {
    cmd_tx: Sender<EngineCommand>,
    resp_rx: Receiver<EngineResponse>,
    thread: Option<JoinHandle<()>>,
}

impl EngineHandle {
    pub fn spawn<O>(game: GameEngine<O>) -> Self
    where
        O: SemanticOracle + Send + 'static,
    {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();

        let thread = std::thread::spawn(move || {
            let mut engine = Engine::new(cmd_rx, resp_tx, game);
            engine.run();
        });

        Self {
            cmd_tx,
            resp_rx,
            thread: Some(thread),
        }
    }

    pub fn send(&self, cmd: EngineCommand) -> bool {
        self.cmd_tx.send(cmd).is_ok()
    }

    pub fn responses(&self) -> &Receiver<EngineResponse> {
        &self.resp_rx
    }

    /// Send a command and wait for it to settle, handing every intermediate
    /// snapshot to `on_progress`.
    ///
    /// Answers to other commands queued earlier with `send` are drained on the
    /// way and their snapshots still reach `on_progress`. An undrained earlier
    /// command of the same kind answers first.
    pub fn request(
        &self,
        cmd: EngineCommand,
        mut on_progress: impl FnMut(&GameState),
    ) -> Option<(EventApplyOutcome, GameState)> {
        let name = cmd.short_name();
        if !self.send(cmd) {
            return None;
        }

        while let Ok(resp) = self.resp_rx.recv() {
            match resp {
                EngineResponse::StateChanged(state) => on_progress(&state),
                EngineResponse::Applied { command, outcome, state } => {
                    if command == name {
                        return Some((outcome, state));
                    }
                    debug!("dropping stale {} answer", command);
                }
            }
        }
        None
    }

    pub fn shutdown(mut self) {
        let _ = self.cmd_tx.send(EngineCommand::Shutdown);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

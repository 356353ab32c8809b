use std::io::{self, BufRead, Write};

use anyhow::Result;
use log::{info, warn};

use word_hop::settings_io::{load_settings, settings_path};
use word_hop::{
    EngineCommand, EngineHandle, EventApplyOutcome, GameEngine, GameState, GameStatus, LlmOracle,
};

const HELP: &str = "\
Bridge the start word to the target, one hop at a time.

  <word>        propose the next hop
  hint          fill the next hop (costs a life)
  solve         reveal a full chain (scores nothing)
  undo          take back the last hop
  next          move on to the next level
  new [word]    new puzzle, optionally built around a word
  reset         start over from level 1
  help          show this text
  quit          leave
";

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = load_settings();
    info!("settings from {}", settings_path().display());

    let oracle = LlmOracle::new(settings.oracle.clone());
    match oracle.client().test_connection() {
        Ok(msg) => info!("{}", msg),
        Err(e) => warn!("oracle not reachable, built-in puzzles only: {:#}", e),
    }

    let engine = EngineHandle::spawn(GameEngine::new(oracle, settings.game.clone()));

    println!("{HELP}");
    run(&engine, EngineCommand::StartPuzzle { seed_word: None });

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, Some(rest.trim())),
            None => (line, None),
        };

        let cmd = match word.to_lowercase().as_str() {
            "quit" | "exit" => break,
            "help" => {
                println!("{HELP}");
                continue;
            }
            "hint" => EngineCommand::RequestHint,
            "solve" => EngineCommand::RequestSolution,
            "undo" => EngineCommand::UndoLastStep,
            "next" => EngineCommand::StartNextLevel,
            "new" => EngineCommand::StartPuzzle {
                seed_word: rest.map(str::to_string),
            },
            "reset" => {
                run(&engine, EngineCommand::ResetGame { full: true });
                EngineCommand::StartPuzzle { seed_word: None }
            }
            _ => {
                let Some((_, state)) = engine.request(EngineCommand::Snapshot, |_| {}) else {
                    break;
                };
                EngineCommand::SubmitHop {
                    index: state.current_step,
                    guess: line.to_string(),
                }
            }
        };

        if !run(&engine, cmd) {
            break;
        }
    }

    engine.shutdown();
    Ok(())
}

/// Send one command, print progress and the settled state.
fn run(engine: &EngineHandle, cmd: EngineCommand) -> bool {
    let settled = engine.request(cmd, |state| {
        if state.in_flight.any() {
            println!("  ...asking the oracle");
        }
    });

    let Some((outcome, state)) = settled else {
        return false;
    };

    match &outcome {
        EventApplyOutcome::Applied => {}
        EventApplyOutcome::Rejected { reason } => println!("  ✘ {reason}"),
        EventApplyOutcome::Skipped { reason } => println!("  - {reason}"),
        EventApplyOutcome::Failed { reason } => println!("  ! {reason}"),
        EventApplyOutcome::Degraded { reason } => println!("  ~ {reason}"),
    }
    render(&state);
    true
}

fn render(state: &GameState) {
    println!(
        "Level {}  Lives {}  Score {}  Streak {}  Won {}",
        state.level, state.lives, state.score, state.streak, state.total_games_won
    );

    if state.has_puzzle() {
        let mut path = vec![state.start_word.clone()];
        for hop in state.hops.iter().take(state.max_steps) {
            path.push(if hop.is_empty() { "____".to_string() } else { hop.clone() });
        }
        path.push(state.end_word.clone());
        println!("  {}", path.join(" → "));
    }

    match state.status() {
        GameStatus::NotStarted => println!("  Type `new` to start a puzzle."),
        GameStatus::InProgress => {}
        GameStatus::LevelComplete if state.revealed && state.has_next_level() => {
            println!("  Solution revealed. Type `next` for another puzzle.")
        }
        GameStatus::LevelComplete if state.revealed => {
            println!("  Solution revealed. Type `new` to retry this level or `reset` to start over.")
        }
        GameStatus::LevelComplete => println!("  Level complete! Type `next` to continue."),
        GameStatus::AllLevelsComplete => println!("  Every level cleared! Type `reset` to play again."),
        GameStatus::GameOver => println!("  Game over. Type `reset` to start again."),
    }
}

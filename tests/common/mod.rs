#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use word_hop::model::oracle_io::{HintRequest, HopRequest, HopVerdict, SeedPair, SeedRequest, SolveRequest};
use word_hop::settings::GameSettings;
use word_hop::{GameEngine, OracleError, OracleResult, SemanticOracle};

/// Scripted answer. `Err` becomes `OracleError::Unavailable`.
pub type Reply<T> = Result<T, String>;

/// Oracle that replays queued answers, then falls back to agreeable defaults.
#[derive(Default)]
pub struct ScriptedOracle {
    seeds: Mutex<VecDeque<Reply<SeedPair>>>,
    verdicts: Mutex<VecDeque<Reply<HopVerdict>>>,
    hints: Mutex<VecDeque<Reply<String>>>,
    chains: Mutex<VecDeque<Reply<Vec<String>>>>,

    pub seed_requests: Mutex<Vec<SeedRequest>>,
    pub hop_requests: Mutex<Vec<HopRequest>>,
    pub hint_requests: Mutex<Vec<HintRequest>>,
    pub solve_requests: Mutex<Vec<SolveRequest>>,
}

impl ScriptedOracle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue_seed(&self, reply: Reply<SeedPair>) {
        self.seeds.lock().unwrap().push_back(reply);
    }

    pub fn queue_verdict(&self, valid: bool, explanation: &str) {
        self.verdicts.lock().unwrap().push_back(Ok(HopVerdict {
            valid,
            explanation: explanation.to_string(),
        }));
    }

    pub fn queue_hint(&self, reply: Reply<String>) {
        self.hints.lock().unwrap().push_back(reply);
    }

    pub fn queue_chain(&self, reply: Reply<Vec<String>>) {
        self.chains.lock().unwrap().push_back(reply);
    }

    /// Drop every answer that has not been used yet.
    pub fn clear_queues(&self) {
        self.seeds.lock().unwrap().clear();
        self.verdicts.lock().unwrap().clear();
        self.hints.lock().unwrap().clear();
        self.chains.lock().unwrap().clear();
    }

    pub fn seed(self, reply: Reply<SeedPair>) -> Self {
        self.queue_seed(reply);
        self
    }

    pub fn valid(self, explanation: &str) -> Self {
        self.verdict(true, explanation)
    }

    pub fn invalid(self, explanation: &str) -> Self {
        self.verdict(false, explanation)
    }

    pub fn verdict(self, valid: bool, explanation: &str) -> Self {
        self.queue_verdict(valid, explanation);
        self
    }

    pub fn verdict_error(self, message: &str) -> Self {
        self.verdicts.lock().unwrap().push_back(Err(message.to_string()));
        self
    }

    pub fn hint(self, reply: Reply<String>) -> Self {
        self.queue_hint(reply);
        self
    }

    pub fn chain(self, reply: Reply<Vec<String>>) -> Self {
        self.queue_chain(reply);
        self
    }
}

fn next<T>(queue: &Mutex<VecDeque<Reply<T>>>, default: impl FnOnce() -> T) -> OracleResult<T> {
    match queue.lock().unwrap().pop_front() {
        Some(Ok(value)) => Ok(value),
        Some(Err(message)) => Err(OracleError::Unavailable(message)),
        None => Ok(default()),
    }
}

impl SemanticOracle for ScriptedOracle {
    fn generate_seed_pair(&self, request: &SeedRequest) -> OracleResult<SeedPair> {
        self.seed_requests.lock().unwrap().push(request.clone());
        next(&self.seeds, || SeedPair::new("cat", "ocean"))
    }

    fn validate_hop(&self, request: &HopRequest) -> OracleResult<HopVerdict> {
        self.hop_requests.lock().unwrap().push(request.clone());
        next(&self.verdicts, || HopVerdict {
            valid: true,
            explanation: "fine".into(),
        })
    }

    fn generate_hint(&self, request: &HintRequest) -> OracleResult<String> {
        self.hint_requests.lock().unwrap().push(request.clone());
        let index = request.current_step + 1;
        next(&self.hints, || format!("hint{}", index))
    }

    fn generate_solution_chain(&self, request: &SolveRequest) -> OracleResult<Vec<String>> {
        self.solve_requests.lock().unwrap().push(request.clone());
        let steps = request.steps;
        next(&self.chains, || (1..=steps).map(|i| format!("link{}", i)).collect())
    }
}

pub fn settings() -> GameSettings {
    GameSettings {
        seed_attempts: 2,
        rng_seed: Some(42),
    }
}

pub fn engine(oracle: ScriptedOracle) -> GameEngine<ScriptedOracle> {
    GameEngine::new(oracle, settings())
}

/// Engine with a puzzle already started at level 1.
pub fn started(oracle: ScriptedOracle) -> GameEngine<ScriptedOracle> {
    let mut engine = engine(oracle);
    assert!(engine.start_puzzle(None).is_applied());
    engine
}

pub fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

use log::debug;

use crate::engine::llm_client::LlmClient;
use crate::engine::oracle::{OracleError, OracleResult, SemanticOracle};
use crate::engine::prompt_builder::PromptBuilder;
use crate::model::llm_decode::{decode_chain, decode_hint, decode_seed_pair, decode_verdict};
use crate::model::oracle_io::{HintRequest, HopRequest, HopVerdict, SeedPair, SeedRequest, SolveRequest};
use crate::settings::OracleSettings;

/// Oracle backed by a chat-completions LLM.
pub struct LlmOracle {
    client: LlmClient,
    settings: OracleSettings,
}

impl LlmOracle {
    pub fn new(settings: OracleSettings) -> Self {
        Self {
            client: LlmClient::new(&settings),
            settings,
        }
    }

    pub fn client(&self) -> &LlmClient {
        &self.client
    }
}

impl SemanticOracle for LlmOracle {
    fn generate_seed_pair(&self, request: &SeedRequest) -> OracleResult<SeedPair> {
        let prompt = PromptBuilder::seed(request);
        let raw = self.client.complete(&prompt.system, &prompt.user, self.settings.seed)?;
        decode_seed_pair(&raw).map_err(OracleError::Malformed)
    }

    fn validate_hop(&self, request: &HopRequest) -> OracleResult<HopVerdict> {
        debug!("validating {} -> {}", request.previous, request.guess);
        let prompt = PromptBuilder::validate(request);
        let raw = self.client.complete(&prompt.system, &prompt.user, self.settings.validate)?;
        Ok(decode_verdict(&raw))
    }

    fn generate_hint(&self, request: &HintRequest) -> OracleResult<String> {
        let prompt = PromptBuilder::hint(request);
        let raw = self.client.complete(&prompt.system, &prompt.user, self.settings.hint)?;
        decode_hint(&raw).map_err(OracleError::Malformed)
    }

    fn generate_solution_chain(&self, request: &SolveRequest) -> OracleResult<Vec<String>> {
        let prompt = PromptBuilder::solve(request);
        let raw = self.client.complete(&prompt.system, &prompt.user, self.settings.solve)?;
        decode_chain(&raw).map_err(OracleError::Malformed)
    }
}

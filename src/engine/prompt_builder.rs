use crate::model::oracle_io::{HintRequest, HopRequest, SeedRequest, SolveRequest};

/// A system + user message pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

/// Builds the text sent to the LLM for each oracle operation.
/// Formatting only: no parsing, no networking.
pub struct PromptBuilder;

impl PromptBuilder {
    pub fn seed(request: &SeedRequest) -> Prompt {
        let system = "You are a word game generator. Generate two English words that can be \
connected through logical steps but are not obviously related. Respond with only a JSON object \
containing \"start\" and \"end\" properties."
            .to_string();

        let mut user = String::new();
        match request.seed_word.as_deref().map(str::trim).filter(|w| !w.is_empty()) {
            Some(seed) => {
                let seed = seed.to_lowercase();
                user.push_str(&format!(
                    "Generate a word connection game using \"{seed}\" as one of the words. \
Create another word that can be connected to \"{seed}\" through logical steps but is not \
obviously related. Choose whether to use \"{seed}\" as the start or end word.\n"
                ));
            }
            None => {
                user.push_str("Generate two words for a word connection game.\n");
            }
        }
        user.push_str(&format!("Difficulty: {}.\n", request.difficulty.describe()));
        push_json_shape(&mut user, r#"{"start": "word1", "end": "word2"}"#);

        Prompt { system, user }
    }

    pub fn validate(request: &HopRequest) -> Prompt {
        let system = "You are a strict word connection validator. Focus on the relationship \
between the two given words. Respond with JSON containing \"valid\" (boolean) and \
\"explanation\" (brief reason). Do not accept identical words."
            .to_string();

        let previous = request.previous.trim();
        let guess = request.guess.trim();
        let target = request.target.trim();

        let mut user = String::new();
        if request.is_final_step {
            user.push_str("Final step: the guess must connect to the target.\n\n");
            user.push_str(&format!("FROM: \"{previous}\"\nGUESS: \"{guess}\"\nTARGET: \"{target}\"\n\n"));
            user.push_str(&format!(
                "CRITICAL: The guess \"{guess}\" must have a clear connection to the target word \
\"{target}\", and to the FROM word \"{previous}\". The connection should be obvious and strong. \
It must not be the same word.\n\n"
            ));
        } else {
            user.push_str("Word connection validation:\n\n");
            user.push_str(&format!(
                "FROM: \"{previous}\"\nTO: \"{guess}\"\nULTIMATE TARGET: \"{target}\"\n\n"
            ));
            user.push_str("CRITICAL: Focus ONLY on the relationship between FROM and TO.\n\n");
        }
        push_connection_kinds(&mut user);
        if !request.is_final_step {
            user.push_str(&format!(
                "\nThe guess \"{guess}\" must have a clear, logical relationship to \"{previous}\".\n"
            ));
        }
        user.push('\n');
        push_json_shape(&mut user, r#"{"valid": true/false, "explanation": "brief reason"}"#);

        Prompt { system, user }
    }

    pub fn hint(request: &HintRequest) -> Prompt {
        let system = "You are a helpful word game assistant. Respond with only a single word \
that makes a logical connection."
            .to_string();

        let previous = if request.current_step == 0 {
            request.start.as_str()
        } else {
            request
                .hops
                .get(request.current_step - 1)
                .map(String::as_str)
                .unwrap_or(request.start.as_str())
        };
        let remaining = request.max_steps.saturating_sub(request.current_step);

        let mut user = String::new();
        user.push_str(&format!(
            "Connect \"{}\" to \"{}\" with exactly {} more intermediate word{}.\n\n",
            previous,
            request.end,
            remaining,
            if remaining == 1 { "" } else { "s" }
        ));
        user.push_str("Context:\n");
        user.push_str(&format!("- Starting word: \"{}\"\n", request.start));
        user.push_str(&format!("- Target word: \"{}\"\n", request.end));
        push_progress(&mut user, &request.hops);
        user.push_str(&format!("- Need next word after: \"{}\"\n\n", previous));
        user.push_str("Requirements:\n");
        user.push_str("- Return ONLY one word\n");
        user.push_str(&format!("- The word should logically connect to \"{}\"\n", previous));
        user.push_str(&format!("- The word should help progress toward \"{}\"\n", request.end));
        user.push_str("- No explanations, just the single word\n\n");
        user.push_str("Next word:");

        Prompt { system, user }
    }

    pub fn solve(request: &SolveRequest) -> Prompt {
        let steps = request.steps;
        let system = format!(
            "You are a word connection expert. Respond ONLY with valid JSON arrays of exactly \
{steps} words. No explanations or markdown. Ensure the final word has a DIRECT, obvious \
connection to the target word."
        );

        let shape: Vec<String> = (1..=steps).map(|i| format!("\"word{i}\"")).collect();

        let mut user = String::new();
        user.push_str(&format!(
            "Connect \"{}\" to \"{}\" with exactly {} intermediate words.\n\n",
            request.start, request.end, steps
        ));
        user.push_str("CRITICAL REQUIREMENTS:\n");
        user.push_str(&format!("- Return ONLY a JSON array with exactly {steps} strings\n"));
        user.push_str("- No explanations, no markdown, no extra text\n");
        user.push_str("- Each word should logically connect to the next\n");
        user.push_str(&format!(
            "- The final word (step {steps}) MUST have a DIRECT, clear connection to the target \"{}\"\n\n",
            request.end
        ));
        user.push_str(&format!("Format: [{}]\n\n", shape.join(",")));
        user.push_str(&format!(
            "Connection path from \"{}\" to \"{}\":",
            request.start, request.end
        ));

        Prompt { system, user }
    }
}

fn push_connection_kinds(prompt: &mut String) {
    prompt.push_str("Valid connections include:\n");
    for kind in [
        "category relationships",
        "physical/functional associations",
        "utilitarian connections",
        "well-known pairings",
        "clever connections",
    ] {
        prompt.push_str("- ");
        prompt.push_str(kind);
        prompt.push('\n');
    }
}

fn push_progress(prompt: &mut String, hops: &[String]) {
    if hops.is_empty() {
        prompt.push_str("- Current progress: none yet\n");
    } else {
        prompt.push_str(&format!("- Current progress: {}\n", hops.join(" → ")));
    }
}

fn push_json_shape(prompt: &mut String, shape: &str) {
    prompt.push_str("Return as JSON: ");
    prompt.push_str(shape);
}

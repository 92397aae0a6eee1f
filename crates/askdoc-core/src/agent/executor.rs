//! Agent executor.
//!
//! Runs one conversational turn: call the model with the tool schema,
//! run any requested tools, feed their results back through the
//! scratchpad, and repeat until the model answers or the iteration limit
//! is hit. Which tool to call (if any) is entirely the model's decision.

use tracing::{Instrument, debug, info, info_span, warn};

use askdoc_types::chat::ChatHistory;
use askdoc_types::config::{AgentConfig, LlmConfig};
use askdoc_types::error::{AgentError, ToolError};
use askdoc_types::llm::{CompletionRequest, Message, ToolCall};

use crate::llm::box_provider::BoxLlmProvider;
use crate::tool::registry::ToolRegistry;

use super::prompt::build_messages;

/// Model and loop settings for the executor.
#[derive(Debug, Clone)]
pub struct AgentSettings {
    /// Empty means the provider's default model.
    pub model: String,
    pub temperature: Option<f64>,
    pub max_tokens: Option<u32>,
    pub system_prompt: String,
    /// Model calls allowed per turn.
    pub max_iterations: usize,
}

impl AgentSettings {
    pub fn from_config(llm: &LlmConfig, agent: &AgentConfig) -> Self {
        Self {
            model: llm.model.clone(),
            temperature: Some(llm.temperature),
            max_tokens: llm.max_tokens,
            system_prompt: agent.system_prompt.clone(),
            max_iterations: agent.max_iterations,
        }
    }
}

/// One tool call made during a turn and what it returned.
#[derive(Debug, Clone)]
pub struct AgentStep {
    pub tool_call: ToolCall,
    pub observation: String,
}

/// Result of a completed turn.
#[derive(Debug, Clone)]
pub struct AgentOutput {
    /// The model's final answer.
    pub output: String,
    /// Tool calls made on the way, in order.
    pub steps: Vec<AgentStep>,
}

/// Drives the model/tool loop for one turn at a time.
pub struct AgentExecutor {
    provider: BoxLlmProvider,
    tools: ToolRegistry,
    settings: AgentSettings,
}

impl AgentExecutor {
    pub fn new(provider: BoxLlmProvider, tools: ToolRegistry, settings: AgentSettings) -> Self {
        Self {
            provider,
            tools,
            settings,
        }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// The model requests are sent to.
    pub fn model(&self) -> &str {
        if self.settings.model.is_empty() {
            self.provider.default_model()
        } else {
            &self.settings.model
        }
    }

    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    /// Answer `input` given the session's prior `history`.
    ///
    /// The scratchpad lives only for this call. A call to an unknown tool
    /// is answered with the list of valid tools and the loop goes on. Any
    /// other model or tool failure ends the turn with an error.
    pub async fn invoke(
        &self,
        input: &str,
        history: &ChatHistory,
    ) -> Result<AgentOutput, AgentError> {
        let definitions = self.tools.definitions();
        let max = self.settings.max_iterations;
        let mut scratchpad: Vec<Message> = Vec::new();
        let mut steps: Vec<AgentStep> = Vec::new();

        for iteration in 1..=max {
            let request = CompletionRequest {
                model: self.model().to_string(),
                messages: build_messages(&self.settings.system_prompt, history, input, &scratchpad),
                tools: definitions.clone(),
                max_tokens: self.settings.max_tokens,
                temperature: self.settings.temperature,
            };

            let span = info_span!(
                "gen_ai.complete",
                gen_ai.system = self.provider.name(),
                gen_ai.request.model = %request.model,
                gen_ai.request.max_tokens = request.max_tokens,
                gen_ai.request.temperature = ?request.temperature,
                agent.iteration = iteration,
            );
            let response = self.provider.complete(&request).instrument(span).await?;
            debug!(
                iteration,
                input_tokens = response.usage.input_tokens,
                output_tokens = response.usage.output_tokens,
                stop_reason = ?response.stop_reason,
                tool_calls = response.tool_calls.len(),
                "Model responded"
            );

            if response.tool_calls.is_empty() {
                info!(iterations = iteration, tool_calls = steps.len(), "Agent finished");
                return Ok(AgentOutput {
                    output: response.content,
                    steps,
                });
            }

            scratchpad.push(Message::assistant_tool_calls(
                response.content,
                response.tool_calls.clone(),
            ));
            for call in response.tool_calls {
                debug!(tool = %call.name, arguments = %call.arguments, "Model requested tool");
                let observation = match self.tools.invoke(&call.name, &call.arguments).await {
                    Ok(observation) => observation,
                    Err(ToolError::NotFound(name)) => {
                        warn!(tool = %name, "Model requested unknown tool");
                        self.invalid_tool_observation(&name)
                    }
                    Err(e) => return Err(e.into()),
                };
                scratchpad.push(Message::tool(call.id.clone(), observation.clone()));
                steps.push(AgentStep {
                    tool_call: call,
                    observation,
                });
            }
        }

        warn!(max_iterations = max, "Agent hit iteration limit");
        Err(AgentError::IterationLimit { max })
    }

    fn invalid_tool_observation(&self, name: &str) -> String {
        format!(
            "{name} is not a valid tool, try one of [{}].",
            self.tools.names().join(", ")
        )
    }
}

//! OpenAiProvider -- concrete [`LlmProvider`] implementation for OpenAI chat
//! completions with function tools.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is never logged
//! or included in `Debug` output.

pub mod types;

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use askdoc_core::llm::provider::LlmProvider;
use askdoc_types::llm::{
    CompletionRequest, CompletionResponse, LlmError, Message, MessageRole, StopReason, ToolCall,
    Usage,
};

use self::types::{
    ApiErrorBody, ChatFunctionCall, ChatFunctionDef, ChatMessage, ChatRequest, ChatResponse,
    ChatTool, ChatToolCall,
};

/// Default OpenAI API base URL.
pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// OpenAI chat-completion provider.
pub struct OpenAiProvider {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    model: String,
}

// No Debug derive: keeps the client and key out of logs entirely.

impl OpenAiProvider {
    pub fn new(api_key: SecretString, model: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_key,
            base_url: OPENAI_BASE_URL.to_string(),
            model,
        }
    }

    /// Override the base URL (proxies, Azure-style gateways, tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Convert a generic [`CompletionRequest`] into a [`ChatRequest`].
    fn to_chat_request(&self, request: &CompletionRequest) -> ChatRequest {
        let model = if request.model.is_empty() {
            self.model.clone()
        } else {
            request.model.clone()
        };

        ChatRequest {
            model,
            messages: request.messages.iter().map(to_chat_message).collect(),
            tools: request
                .tools
                .iter()
                .map(|t| ChatTool {
                    kind: "function".to_string(),
                    function: ChatFunctionDef {
                        name: t.name.clone(),
                        description: t.description.clone(),
                        parameters: t.parameters.clone(),
                    },
                })
                .collect(),
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        }
    }
}

fn to_chat_message(message: &Message) -> ChatMessage {
    let content = if message.role == MessageRole::Assistant
        && !message.tool_calls.is_empty()
        && message.content.is_empty()
    {
        None
    } else {
        Some(message.content.clone())
    };

    ChatMessage {
        role: message.role.to_string(),
        content,
        tool_calls: message
            .tool_calls
            .iter()
            .map(|c| ChatToolCall {
                id: c.id.clone(),
                kind: "function".to_string(),
                function: ChatFunctionCall {
                    name: c.name.clone(),
                    arguments: c.arguments.clone(),
                },
            })
            .collect(),
        tool_call_id: message.tool_call_id.clone(),
    }
}

/// Map a parsed response body into the generic response.
fn from_chat_response(resp: ChatResponse) -> Result<CompletionResponse, LlmError> {
    let choice = resp
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| LlmError::Deserialization("response contained no choices".to_string()))?;

    let tool_calls: Vec<ToolCall> = choice
        .message
        .tool_calls
        .into_iter()
        .map(|c| ToolCall {
            id: c.id,
            name: c.function.name,
            arguments: c.function.arguments,
        })
        .collect();

    let stop_reason = match choice.finish_reason.as_deref() {
        Some("tool_calls") | Some("function_call") => StopReason::ToolUse,
        Some("length") => StopReason::MaxTokens,
        Some("content_filter") => StopReason::ContentFilter,
        _ if !tool_calls.is_empty() => StopReason::ToolUse,
        _ => StopReason::EndTurn,
    };

    let usage = resp
        .usage
        .map(|u| Usage {
            input_tokens: u.prompt_tokens,
            output_tokens: u.completion_tokens,
        })
        .unwrap_or_default();

    Ok(CompletionResponse {
        id: resp.id,
        content: choice.message.content.unwrap_or_default(),
        tool_calls,
        model: resp.model,
        stop_reason,
        usage,
    })
}

/// Map a non-success status and body to an [`LlmError`].
fn map_error_status(status: reqwest::StatusCode, retry_after: Option<u64>, body: String) -> LlmError {
    let code = serde_json::from_str::<ApiErrorBody>(&body)
        .ok()
        .and_then(|b| b.error.code);

    match status.as_u16() {
        401 | 403 => LlmError::AuthenticationFailed,
        429 => LlmError::RateLimited {
            retry_after_ms: retry_after.map(|s| s * 1000),
        },
        400 if code.as_deref() == Some("context_length_exceeded") => {
            LlmError::ContextLengthExceeded
        }
        400 | 404 | 422 => LlmError::InvalidRequest(body),
        503 => LlmError::Overloaded(body),
        _ => LlmError::Provider {
            message: format!("HTTP {status}: {body}"),
        },
    }
}

impl LlmProvider for OpenAiProvider {
    fn name(&self) -> &str {
        "openai"
    }

    fn default_model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let body = self.to_chat_request(request);
        let url = self.url("/chat/completions");
        debug!(
            model = %body.model,
            messages = body.messages.len(),
            tools = body.tools.len(),
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Provider {
                message: format!("HTTP request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let retry_after = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok());
            let error_body = response.text().await.unwrap_or_default();
            return Err(map_error_status(status, retry_after, error_body));
        }

        let chat_resp: ChatResponse = response.json().await.map_err(|e| {
            LlmError::Deserialization(format!("failed to parse response: {e}"))
        })?;

        from_chat_response(chat_resp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use askdoc_types::llm::ToolDefinition;
    use reqwest::StatusCode;

    fn make_provider() -> OpenAiProvider {
        OpenAiProvider::new(
            SecretString::from("test-key-not-real"),
            "gpt-3.5-turbo".to_string(),
        )
    }

    #[test]
    fn test_provider_name_and_default_model() {
        let provider = make_provider();
        assert_eq!(provider.name(), "openai");
        assert_eq!(provider.default_model(), "gpt-3.5-turbo");
    }

    #[test]
    fn test_with_base_url_trims_slash() {
        let provider = make_provider().with_base_url("http://localhost:8080/v1/");
        assert_eq!(provider.url("/chat/completions"), "http://localhost:8080/v1/chat/completions");
    }

    #[test]
    fn test_to_chat_request_with_tools_and_scratchpad() {
        let provider = make_provider();
        let call = ToolCall {
            id: "call_abc".to_string(),
            name: "text_retreiver".to_string(),
            arguments: r#"{"query":"return policy"}"#.to_string(),
        };
        let request = CompletionRequest {
            model: String::new(),
            messages: vec![
                Message::system("Be helpful"),
                Message::user("What is the return policy?"),
                Message::assistant_tool_calls("", vec![call]),
                Message::tool("call_abc", "Returns within 30 days."),
            ],
            tools: vec![ToolDefinition {
                name: "text_retreiver".to_string(),
                description: "Give answer based on the file".to_string(),
                parameters: serde_json::json!({"type": "object"}),
            }],
            max_tokens: None,
            temperature: Some(0.7),
        };

        let json = serde_json::to_value(provider.to_chat_request(&request)).unwrap();
        assert_eq!(json["model"], "gpt-3.5-turbo");
        assert_eq!(json["temperature"], 0.7);
        assert!(json.get("max_tokens").is_none());
        assert_eq!(json["tools"][0]["type"], "function");
        assert_eq!(json["tools"][0]["function"]["name"], "text_retreiver");

        let messages = json["messages"].as_array().unwrap();
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[2]["role"], "assistant");
        assert!(messages[2]["content"].is_null());
        assert_eq!(messages[2]["tool_calls"][0]["id"], "call_abc");
        assert_eq!(messages[2]["tool_calls"][0]["function"]["name"], "text_retreiver");
        assert_eq!(messages[3]["role"], "tool");
        assert_eq!(messages[3]["tool_call_id"], "call_abc");
    }

    #[test]
    fn test_parse_tool_call_response() {
        let body = r#"{
            "id": "chatcmpl-1",
            "model": "gpt-3.5-turbo-0125",
            "choices": [{
                "index": 0,
                "message": {
                    "role": "assistant",
                    "content": null,
                    "tool_calls": [{
                        "id": "call_1",
                        "type": "function",
                        "function": {"name": "tavily_search_results_json", "arguments": "{\"query\":\"weather\"}"}
                    }]
                },
                "finish_reason": "tool_calls"
            }],
            "usage": {"prompt_tokens": 120, "completion_tokens": 18, "total_tokens": 138}
        }"#;
        let resp: ChatResponse = serde_json::from_str(body).unwrap();
        let out = from_chat_response(resp).unwrap();

        assert_eq!(out.stop_reason, StopReason::ToolUse);
        assert_eq!(out.content, "");
        assert_eq!(out.tool_calls.len(), 1);
        assert_eq!(out.tool_calls[0].name, "tavily_search_results_json");
        assert_eq!(out.tool_calls[0].arguments, r#"{"query":"weather"}"#);
        assert_eq!(out.usage.input_tokens, 120);
        assert_eq!(out.usage.output_tokens, 18);
    }

    #[test]
    fn test_parse_final_answer_response() {
        let body = r#"{
            "id": "chatcmpl-2",
            "model": "gpt-3.5-turbo",
            "choices": [{"message": {"role": "assistant", "content": "Returns within 30 days."}, "finish_reason": "stop"}]
        }"#;
        let resp: ChatResponse = serde_json::from_str(body).unwrap();
        let out = from_chat_response(resp).unwrap();
        assert_eq!(out.stop_reason, StopReason::EndTurn);
        assert_eq!(out.content, "Returns within 30 days.");
        assert!(out.tool_calls.is_empty());
        assert_eq!(out.usage.input_tokens, 0);
    }

    #[test]
    fn test_parse_gateway_response_with_null_fields() {
        let body = r#"{
            "id": null,
            "model": null,
            "choices": [{"message": {"content": "hi", "tool_calls": null}, "finish_reason": null}],
            "usage": null
        }"#;
        let resp: ChatResponse = serde_json::from_str(body).unwrap();
        let out = from_chat_response(resp).unwrap();
        assert_eq!(out.content, "hi");
        assert!(out.tool_calls.is_empty());
        assert_eq!(out.stop_reason, StopReason::EndTurn);
        assert!(out.id.is_empty());
    }

    #[test]
    fn test_parse_tool_call_with_null_arguments() {
        let body = r#"{
            "choices": [{
                "message": {
                    "content": null,
                    "tool_calls": [{"id": "call_1", "type": null, "function": {"name": "text_retreiver", "arguments": null}}]
                },
                "finish_reason": "tool_calls"
            }]
        }"#;
        let resp: ChatResponse = serde_json::from_str(body).unwrap();
        let out = from_chat_response(resp).unwrap();
        assert_eq!(out.tool_calls.len(), 1);
        assert_eq!(out.tool_calls[0].name, "text_retreiver");
        assert!(out.tool_calls[0].arguments.is_empty());
    }

    #[test]
    fn test_empty_choices_is_error() {
        let resp: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(matches!(from_chat_response(resp), Err(LlmError::Deserialization(_))));
    }

    #[test]
    fn test_map_error_status() {
        assert!(matches!(
            map_error_status(StatusCode::UNAUTHORIZED, None, String::new()),
            LlmError::AuthenticationFailed
        ));
        assert!(matches!(
            map_error_status(StatusCode::TOO_MANY_REQUESTS, Some(2), String::new()),
            LlmError::RateLimited { retry_after_ms: Some(2000) }
        ));
        let body = r#"{"error": {"message": "too long", "code": "context_length_exceeded"}}"#;
        assert!(matches!(
            map_error_status(StatusCode::BAD_REQUEST, None, body.to_string()),
            LlmError::ContextLengthExceeded
        ));
        assert!(matches!(
            map_error_status(StatusCode::INTERNAL_SERVER_ERROR, None, "boom".to_string()),
            LlmError::Provider { .. }
        ));
    }
}

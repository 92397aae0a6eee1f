//! Agent tools.
//!
//! A tool is a named capability the model may call with JSON arguments.
//! `Tool` uses RPITIT; `BoxTool` erases it the same way `BoxLlmProvider`
//! does so heterogeneous tools can share one `ToolRegistry`.

pub mod registry;
pub mod retriever;
pub mod web_search;

use std::future::Future;
use std::pin::Pin;

use schemars::JsonSchema;
use serde::Deserialize;

use askdoc_types::error::ToolError;
use askdoc_types::llm::ToolDefinition;

/// A capability exposed to the model.
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// JSON schema of the arguments object.
    fn parameters(&self) -> serde_json::Value;

    /// Run the tool with the model-produced JSON `arguments`.
    fn invoke(
        &self,
        arguments: &str,
    ) -> impl Future<Output = Result<String, ToolError>> + Send;

    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.name().to_string(),
            description: self.description().to_string(),
            parameters: self.parameters(),
        }
    }
}

/// Object-safe version of [`Tool`] with boxed futures.
pub trait ToolDyn: Send + Sync {
    fn dyn_definition(&self) -> ToolDefinition;

    fn dyn_name(&self) -> &str;

    fn dyn_invoke<'a>(
        &'a self,
        arguments: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, ToolError>> + Send + 'a>>;
}

impl<T: Tool> ToolDyn for T {
    fn dyn_definition(&self) -> ToolDefinition {
        self.definition()
    }

    fn dyn_name(&self) -> &str {
        self.name()
    }

    fn dyn_invoke<'a>(
        &'a self,
        arguments: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, ToolError>> + Send + 'a>> {
        Box::pin(self.invoke(arguments))
    }
}

/// Type-erased tool.
pub struct BoxTool {
    inner: Box<dyn ToolDyn>,
}

impl BoxTool {
    pub fn new<T: Tool + 'static>(tool: T) -> Self {
        Self {
            inner: Box::new(tool),
        }
    }

    pub fn name(&self) -> &str {
        self.inner.dyn_name()
    }

    pub fn definition(&self) -> ToolDefinition {
        self.inner.dyn_definition()
    }

    pub async fn invoke(&self, arguments: &str) -> Result<String, ToolError> {
        self.inner.dyn_invoke(arguments).await
    }
}

/// Arguments shared by both built-in tools: a single free-text query.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct QueryArgs {
    /// The query to look up.
    pub query: String,
}

impl QueryArgs {
    /// Parse model-produced arguments for `tool`.
    ///
    /// A bare JSON string is accepted as the query as well.
    pub fn parse(tool: &str, arguments: &str) -> Result<Self, ToolError> {
        if let Ok(args) = serde_json::from_str::<QueryArgs>(arguments) {
            return Ok(args);
        }
        match serde_json::from_str::<serde_json::Value>(arguments) {
            Ok(serde_json::Value::String(query)) => Ok(QueryArgs { query }),
            Ok(_) => Err(ToolError::InvalidArguments {
                tool: tool.to_string(),
                message: "expected an object with a 'query' string".to_string(),
            }),
            Err(e) => Err(ToolError::InvalidArguments {
                tool: tool.to_string(),
                message: e.to_string(),
            }),
        }
    }

    /// JSON schema for the arguments object.
    pub fn schema() -> serde_json::Value {
        serde_json::to_value(schemars::schema_for!(QueryArgs))
            .expect("QueryArgs schema serialization should never fail")
    }
}

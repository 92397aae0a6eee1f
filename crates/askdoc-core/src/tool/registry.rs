//! Ordered collection of the tools offered to the model.

use tracing::debug;

use askdoc_types::error::ToolError;
use askdoc_types::llm::ToolDefinition;

use super::BoxTool;

/// Tools by name, in registration order.
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<BoxTool>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool. A tool with the same name replaces the earlier one
    /// in place.
    pub fn register(&mut self, tool: BoxTool) {
        if let Some(existing) = self.tools.iter_mut().find(|t| t.name() == tool.name()) {
            *existing = tool;
        } else {
            self.tools.push(tool);
        }
    }

    pub fn with(mut self, tool: BoxTool) -> Self {
        self.register(tool);
        self
    }

    /// Definitions handed to the model with every completion request.
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools.iter().map(BoxTool::definition).collect()
    }

    pub fn names(&self) -> Vec<&str> {
        self.tools.iter().map(BoxTool::name).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Invoke the tool called `name` with raw JSON `arguments`.
    pub async fn invoke(&self, name: &str, arguments: &str) -> Result<String, ToolError> {
        let tool = self
            .tools
            .iter()
            .find(|t| t.name() == name)
            .ok_or_else(|| ToolError::NotFound(name.to_string()))?;
        debug!(tool = name, "Invoking tool");
        tool.invoke(arguments).await
    }
}

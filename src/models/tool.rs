use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tool {
    pub name: String,
    pub description: String,
}

/// One recommendation group, in the order the tools are listed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolCategory {
    pub name: String,
    pub tools: Vec<Tool>,
}

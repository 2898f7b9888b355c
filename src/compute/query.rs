/// Command named by the first token of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandId {
    Set,
    Get,
    Del,
    Unknown,
}

impl CommandId {
    /// Map an upper-case command name to its id. Matching is case-sensitive.
    pub fn from_name(name: &str) -> Self {
        match name {
            "SET" => CommandId::Set,
            "GET" => CommandId::Get,
            "DEL" => CommandId::Del,
            _ => CommandId::Unknown,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CommandId::Set => "SET",
            CommandId::Get => "GET",
            CommandId::Del => "DEL",
            CommandId::Unknown => "UNKNOWN",
        }
    }
}

/// A validated command and its arguments, command token excluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    command_id: CommandId,
    arguments: Vec<String>,
}

impl Query {
    pub fn new(command_id: CommandId, arguments: Vec<String>) -> Self {
        Query {
            command_id,
            arguments,
        }
    }

    pub fn command_id(&self) -> CommandId {
        self.command_id
    }

    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }
}

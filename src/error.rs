use thiserror::Error;

/// Problems with the rule set itself. Reported before any mapping runs.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigurationError {
    #[error("Type map already registered: {pair}")]
    DuplicateTypeMap { pair: String },
    #[error("Unknown destination member '{member}' in {pair}")]
    UnknownMember { pair: String, member: String },
    #[error("Unmapped members in {pair}: {}", .members.join(", "))]
    UnmappedMembers { pair: String, members: Vec<String> },
    #[error("Member '{member}' of {pair} needs a type map for {nested}")]
    MissingNestedMap {
        pair: String,
        member: String,
        nested: String,
    },
}

/// Failures while projecting a concrete source value.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MappingError {
    #[error("Missing type map configuration: {source_type} -> {destination_type}")]
    MissingTypeMap {
        source_type: String,
        destination_type: String,
    },
    #[error("Null reference while reading '{path}'")]
    NullReference { path: String },
    #[error("Cycle detected while mapping {type_name}")]
    CycleDetected { type_name: String },
    #[error("Maximum mapping depth of {max_depth} exceeded")]
    DepthExceeded { max_depth: usize },
}

impl MappingError {
    pub fn null_reference(path: impl Into<String>) -> Self {
        Self::NullReference { path: path.into() }
    }
}

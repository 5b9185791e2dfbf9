use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableDataDomainError {
    #[error("no handler could handle the request")]
    NoCapableHandler,

    #[error("unhandled exception while retrieving data")]
    HandlerExecutionFault,

    #[error("the handler could not handle the request")]
    SourceUnavailable,

    #[error("could not find the specified table, {table_name}, in the {database_name} database")]
    TableNotFound {
        table_name: String,
        database_name: String,
    },

    #[error("no data was found in the cache")]
    CacheMiss,

    #[error("no valid data handler for the request")]
    NoValidDataHandler,

    #[error("an unhandled exception occurred while the {handler} was processing the request")]
    HandlerFault { handler: &'static str },

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}

impl TableDataDomainError {
    /// Faults are unexpected errors raised while a handler executes, as opposed
    /// to domain outcomes such as a missing table.
    pub fn is_fault(&self) -> bool {
        matches!(self, Self::InfrastructureError(_))
    }
}

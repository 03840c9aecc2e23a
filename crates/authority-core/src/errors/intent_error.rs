/// Errors from parsing the string forms of closed enums.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntentError {
    #[error("unknown query intent: {name}")]
    UnknownIntent { name: String },

    #[error("unknown authority signal: {name}")]
    UnknownSignal { name: String },

    #[error("unknown result bucket: {name}")]
    UnknownBucket { name: String },
}

/// Build-time validation failures. Never raised at request time.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("{count} binding configuration error(s):\n{}", .details.join("\n"))]
    BindingConfiguration { count: usize, details: Vec<String> },

    #[error("signal topology collapse: {reason}")]
    TopologyCollapse { reason: String },

    #[error("{count} graph integrity error(s):\n{}", .details.join("\n"))]
    GraphIntegrity { count: usize, details: Vec<String> },
}

impl ValidationError {
    /// Aggregate a list of binding problems. `None` when the list is empty.
    pub fn from_binding_errors(details: Vec<String>) -> Option<Self> {
        if details.is_empty() {
            return None;
        }
        Some(Self::BindingConfiguration {
            count: details.len(),
            details,
        })
    }
}

mod alert;
mod generate;

pub use alert::{Agent, Alert, Hit, Input, Location, LogMeta, Rule};
pub use generate::Dataset;

/// The single index this service pretends to host.
pub const INDEX_NAME: &str = "wazuh-alerts-2024.09.22";

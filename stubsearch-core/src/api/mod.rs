mod endpoint;
mod gateway;
mod statics;
#[cfg(test)]
mod tests;

pub use endpoint::Endpoint;
pub use gateway::MockGateway;

mod setup;

pub use setup::{build_server, run};

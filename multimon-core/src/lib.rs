pub mod cli;
pub mod conf;
pub mod logging;
pub mod record;
pub mod session;
pub mod sink;
pub mod supervisor;
pub mod transport;

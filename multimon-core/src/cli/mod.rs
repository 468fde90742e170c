pub mod conf;
mod decode;
mod list;

pub use decode::run_decode;
pub use list::run_list;

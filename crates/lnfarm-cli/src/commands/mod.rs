pub mod common;
pub mod link;
pub mod show;

pub use common::RunOptions;
pub use link::Link;
pub use show::Show;

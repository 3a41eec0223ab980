mod demo;
mod free;

pub use demo::run_demo;
pub use free::run_free;
pub use self_test::run_self_test;

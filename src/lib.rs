mod demo;
mod greet;
mod tally;
pub mod timing;

pub use demo::{run_demo, DEMO_STEPS};
pub use greet::{greet, GREETING_TEMPLATE};
pub use tally::{Tally, INITIAL_VALUE};

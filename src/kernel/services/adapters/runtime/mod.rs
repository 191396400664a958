//! Async runtime adapter: executes host requests and sends replies back to the display thread.

mod runtime;

pub use runtime::AsyncRuntime;

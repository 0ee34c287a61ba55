// SCVP adapter module - re-exports all public interfaces

mod client;
mod constants;
mod diagnostics;
mod engine;
mod url_validation;

pub use client::*;
pub use constants::*;
pub use diagnostics::*;
pub use engine::*;
pub use url_validation::*;

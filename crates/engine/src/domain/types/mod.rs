// Re-export all types so callers can use `domain::types::*`

pub use certificate::*;
pub use config::*;
pub use exchange::*;
pub use criteria::*;
pub use trust::*;

// Module declarations
mod certificate;
mod config;
mod exchange;
mod criteria;
mod trust;

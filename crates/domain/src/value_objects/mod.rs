mod chance;
mod stats;

pub use chance::Chance;
pub use stats::{StatDelta, StatKind, StatVector};

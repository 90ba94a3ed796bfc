mod lookup;
mod serve;

pub use lookup::{LookupCommand, LookupOutcome};
pub use serve::ServeCommand;

/// Path validation command.
pub mod check;
/// Page encryption command.
pub mod encrypt;
/// Command error type.
pub mod error;
/// Node joining command.
pub mod join;
/// Path splitting command.
pub mod split;
/// Shared parsing and output helpers.
pub mod util;

pub use error::{CliError, Result};

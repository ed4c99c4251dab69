/// Container inspection command.
pub mod inspect;
/// Shared output helpers.
pub(crate) mod util;

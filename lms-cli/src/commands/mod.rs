//! CLI command implementations

mod list;
mod search;
mod shell;
mod top;

pub use list::list;
pub use search::search;
pub use shell::shell;
pub use top::top;

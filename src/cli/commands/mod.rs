//! One module per subcommand, each exposing `execute`.

pub mod get;
pub mod init;
pub mod list;
pub mod merge;
pub mod rekey;
pub mod remove;
pub mod search;
pub mod set;

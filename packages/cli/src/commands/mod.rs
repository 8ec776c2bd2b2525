pub mod export;
pub mod init;
pub mod show;

pub use export::{export, ExportArgs};
pub use init::{init, InitArgs};
pub use show::{show, ShowArgs};

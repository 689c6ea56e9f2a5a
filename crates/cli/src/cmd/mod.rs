mod check;
mod init;
mod show;

pub use check::cmd_check;
pub use init::cmd_init;
pub use show::cmd_show;

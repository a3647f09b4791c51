pub mod collect;
pub mod init;

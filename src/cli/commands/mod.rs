pub mod decode;
pub mod generate;
pub mod init;

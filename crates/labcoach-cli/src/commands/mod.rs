pub mod experiments;
pub mod feedback;
pub mod hints;
pub mod init;

pub mod check;
pub mod init;

pub use check::CheckOutcome;

pub mod fade;
pub mod footer;
pub mod header;
pub mod progress;
pub mod toast;

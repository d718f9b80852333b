pub mod rejection;
pub mod tenant;

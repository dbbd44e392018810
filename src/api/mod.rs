pub mod policy;
pub mod v1;

pub mod allocate;
pub mod serve;

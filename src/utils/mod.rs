pub mod artifact;
pub mod storage;
pub mod validation;

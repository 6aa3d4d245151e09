pub mod emit;
pub mod raw;

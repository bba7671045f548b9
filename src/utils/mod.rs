pub mod filename;
pub mod fraction;

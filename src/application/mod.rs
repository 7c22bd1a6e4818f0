pub mod timestamp;
pub mod transform;
pub mod translate;

pub mod alfred;

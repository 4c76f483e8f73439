pub mod tool_trait;
pub mod geometry;
pub mod paint;
pub mod bucket;
pub mod pan;

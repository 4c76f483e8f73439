pub mod color;
pub mod error;
pub mod id_gen;
pub mod pixel_buffer;
pub mod layer;
pub mod layer_stack;

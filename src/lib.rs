//! Layer compositing and tool-editing engine for a raster image editor.
//!
//! An [`app::engine::Editor`] owns a [`core::layer_stack::LayerStack`], a
//! [`app::view_state::ViewState`] and the painting tools. UI glue feeds it
//! pointer events in screen space and pulls composited frames with
//! [`app::engine::Editor::render_frame`].

pub mod core;
pub mod render;
pub mod tools;
pub mod app;

rust_i18n::i18n!("locales", fallback = "en");

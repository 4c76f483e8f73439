use layerpaint::app::config::{EditorConfig, CHECKER_DARK, CHECKER_LIGHT};
use layerpaint::app::engine::Editor;
use layerpaint::app::view_state::{ViewState, ZoomDirection};
use layerpaint::core::color::Color;
use layerpaint::core::error::CoreError;
use layerpaint::core::layer::Layer;
use layerpaint::core::pixel_buffer::PixelBuffer;
use layerpaint::render::compositor::DEFAULT_BACKGROUND;

const RED: Color = Color::opaque(255, 0, 0);
const BLUE: Color = Color::opaque(0, 0, 255);

fn empty_editor(w: u32, h: u32) -> Editor {
    let config = EditorConfig::default()
        .with_canvas_size(w, h)
        .with_base_layer(None)
        .with_background(Color::WHITE);
    Editor::new(config).unwrap()
}

fn solid(name: &str, w: u32, h: u32, c: Color) -> Layer {
    Layer::from_buffer(name, PixelBuffer::filled(w, h, c).unwrap())
}

#[test]
fn test_default_session_has_checkerboard_base() {
    let editor = Editor::new(EditorConfig::default()).unwrap();
    assert_eq!(editor.layers().len(), 1);
    let base = editor.layers().active().unwrap();
    assert_eq!((base.width(), base.height()), (512, 512));
    assert_eq!(base.get_pixel(0, 0).unwrap(), CHECKER_LIGHT);
    assert_eq!(base.get_pixel(10, 0).unwrap(), CHECKER_DARK);
    assert_eq!(editor.brush().radius(), 10.0);
    assert_eq!(editor.brush().color, Color::BLACK);
}

#[test]
fn test_empty_stack_renders_background() {
    let editor = Editor::new(EditorConfig::default().with_base_layer(None)).unwrap();
    let frame = editor.render_frame(8, 4).unwrap();
    assert_eq!((frame.width(), frame.height()), (8, 4));
    assert_eq!(frame.get(7, 3).unwrap(), DEFAULT_BACKGROUND);
}

#[test]
fn test_top_layer_occludes_bottom() {
    let mut editor = empty_editor(4, 4);
    editor.append_layer(solid("A", 4, 4, BLUE));
    editor.append_layer(solid("B", 4, 4, RED));
    let frame = editor.render_frame(4, 4).unwrap();
    assert_eq!(frame.get(2, 2).unwrap(), RED);

    // 隐藏顶层后底层可见
    editor.set_visible(1, false).unwrap();
    let frame = editor.render_frame(4, 4).unwrap();
    assert_eq!(frame.get(2, 2).unwrap(), BLUE);
}

#[test]
fn test_half_opacity_red_over_white() {
    let mut editor = empty_editor(2, 2);
    editor.append_layer(solid("R", 2, 2, RED));
    editor.set_layer_opacity(0, 0.5).unwrap();
    let px = editor.render_frame(2, 2).unwrap().get(0, 0).unwrap();
    assert_eq!(px.r, 255);
    assert!((127..=128).contains(&px.g) && (127..=128).contains(&px.b), "{px:?}");
    assert_eq!(px.a, 255);
}

#[test]
fn test_render_follows_view() {
    let mut editor = empty_editor(10, 10);
    let mut l = Layer::new_blank("L", 10, 10).unwrap();
    l.set_pixel(5, 5, RED).unwrap();
    editor.append_layer(l);

    editor.set_view(ViewState::new(5.0, 5.0, 1.0));
    assert_eq!(editor.render_frame(4, 4).unwrap().get(0, 0).unwrap(), RED);

    editor.set_view(ViewState::new(0.0, 0.0, 2.0));
    let frame = editor.render_frame(20, 20).unwrap();
    for (x, y) in [(10, 10), (11, 10), (10, 11), (11, 11)] {
        assert_eq!(frame.get(x, y).unwrap(), RED);
    }
    assert_eq!(frame.get(12, 10).unwrap(), Color::WHITE);
}

#[test]
fn test_zoom_keeps_pixel_under_cursor() {
    let mut editor = empty_editor(64, 64);
    let mut l = Layer::new_blank("L", 64, 64).unwrap();
    l.set_pixel(20, 20, RED).unwrap();
    editor.append_layer(l);

    for _ in 0..3 {
        editor.zoom_at(20.5, 20.5, ZoomDirection::In);
    }
    let frame = editor.render_frame(64, 64).unwrap();
    assert_eq!(frame.get(20, 20).unwrap(), RED);
}

#[test]
fn test_render_with_huge_pan_shows_background() {
    let mut editor = empty_editor(4, 4);
    editor.append_layer(solid("R", 4, 4, RED));
    editor.set_view(ViewState::new(1e19, 0.0, 1.0));
    let frame = editor.render_frame(4, 4).unwrap();
    assert!(frame.rows().all(|r| r.chunks_exact(4).all(|p| p == Color::WHITE.to_array())));
}

#[test]
fn test_render_invalid_size() {
    let editor = empty_editor(4, 4);
    assert_eq!(editor.render_frame(0, 0).unwrap_err(), CoreError::InvalidDimensions { width: 0, height: 0 });
}

#[test]
fn test_error_messages_localized() {
    let msg = CoreError::OutOfBounds { x: 3, y: 7 }.to_string();
    assert!(msg.contains('3') && msg.contains('7'), "{msg}");
    assert_ne!(msg, "error.out_of_bounds");
}

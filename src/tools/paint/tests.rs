use super::*;
use crate::app::view_state::ViewState;
use crate::core::layer::Layer;
use crate::core::layer_stack::LayerStack;

fn input(x: f64, y: f64) -> ToolInput {
    ToolInput { screen: Point::new(x, y), canvas: Point::new(x, y) }
}

fn stack(w: u32, h: u32) -> LayerStack {
    let mut s = LayerStack::new();
    s.push(Layer::new_blank("L", w, h).unwrap());
    s
}

fn pixel(s: &LayerStack, x: u32, y: u32) -> Color {
    s.active().unwrap().get_pixel(x, y).unwrap()
}

#[test]
fn test_stamp_circle_shape() {
    let tool = PaintTool::new(PaintMode::Brush);
    let brush = BrushSettings::new(Color::BLACK, 3.0);
    let mut buf = PixelBuffer::new(10, 10).unwrap();
    let n = tool.stamp(&mut buf, Point::new(5.0, 5.0), &brush).unwrap();
    assert!(n > 20 && n < 36, "covered {n}");
    assert_eq!(buf.get(5, 5).unwrap(), Color::BLACK);
    assert_eq!(buf.get(2, 5).unwrap(), Color::BLACK);
    assert_eq!(buf.get(2, 2).unwrap().a, 0, "corner outside radius");
    assert_eq!(buf.get(8, 5).unwrap().a, 0);
}

#[test]
fn test_stamp_clips_at_edges() {
    let tool = PaintTool::new(PaintMode::Brush);
    let brush = BrushSettings::new(Color::BLACK, 5.0);
    let mut buf = PixelBuffer::new(4, 4).unwrap();
    tool.stamp(&mut buf, Point::new(-1.0, -1.0), &brush).unwrap();
    assert_eq!(buf.get(0, 0).unwrap(), Color::BLACK);
    assert_eq!(tool.stamp(&mut buf, Point::new(500.0, 500.0), &brush).unwrap(), 0);
}

#[test]
fn test_brush_blends_semi_transparent() {
    let tool = PaintTool::new(PaintMode::Brush);
    let brush = BrushSettings::new(Color::new(0, 0, 0, 128), 2.0);
    let mut buf = PixelBuffer::filled(4, 4, Color::WHITE).unwrap();
    tool.stamp(&mut buf, Point::new(2.0, 2.0), &brush).unwrap();
    let c = buf.get(2, 2).unwrap();
    assert_eq!(c.a, 255);
    assert_eq!(c.r, 127);
}

#[test]
fn test_eraser_replaces() {
    let tool = PaintTool::new(PaintMode::Eraser);
    let brush = BrushSettings::new(Color::WHITE, 2.0);
    let mut buf = PixelBuffer::filled(4, 4, Color::opaque(9, 9, 9)).unwrap();
    tool.stamp(&mut buf, Point::new(2.0, 2.0), &brush).unwrap();
    assert_eq!(buf.get(2, 2).unwrap(), Color::transparent());
    assert_eq!(buf.get(0, 3).unwrap(), Color::opaque(9, 9, 9));
}

#[test]
fn test_stroke_state_machine() {
    let mut layers = stack(64, 16);
    let mut view = ViewState::default();
    let brush = BrushSettings::new(Color::BLACK, 2.0);
    let mut ctx = ToolContext { layers: &mut layers, view: &mut view, brush: &brush };
    let mut tool = PaintTool::new(PaintMode::Brush);

    tool.on_pointer_move(input(5.0, 8.0), &mut ctx).unwrap();
    assert!(!tool.is_active());
    assert_eq!(pixel(ctx.layers, 5, 8).a, 0, "idle motion must not paint");
    assert_eq!(tool.last_point(), Some(Point::new(5.0, 8.0)));

    tool.on_pointer_down(input(5.0, 8.0), &mut ctx).unwrap();
    assert!(tool.is_active());
    tool.on_pointer_move(input(40.0, 8.0), &mut ctx).unwrap();
    for x in 5..40 {
        assert_eq!(pixel(ctx.layers, x, 8), Color::BLACK, "gap at x={x}");
    }
    tool.on_pointer_up(input(40.0, 8.0), &mut ctx).unwrap();
    assert!(!tool.is_active());

    tool.on_pointer_move(input(60.0, 2.0), &mut ctx).unwrap();
    assert_eq!(pixel(ctx.layers, 50, 5).a, 0, "no drawing after release");
}

#[test]
fn test_stroke_without_layer_is_noop() {
    let mut layers = LayerStack::new();
    let mut view = ViewState::default();
    let brush = BrushSettings::new(Color::BLACK, 4.0);
    let mut ctx = ToolContext { layers: &mut layers, view: &mut view, brush: &brush };
    let mut tool = PaintTool::new(PaintMode::Eraser);
    tool.on_pointer_down(input(1.0, 1.0), &mut ctx).unwrap();
    tool.on_pointer_move(input(9.0, 9.0), &mut ctx).unwrap();
    assert_eq!(tool.last_point(), Some(Point::new(9.0, 9.0)));
    tool.on_pointer_up(input(9.0, 9.0), &mut ctx).unwrap();
}

#[test]
fn test_instances_are_independent() {
    let mut a = PaintTool::new(PaintMode::Brush);
    let b = PaintTool::new(PaintMode::Brush);
    let mut layers = stack(8, 8);
    let mut view = ViewState::default();
    let brush = BrushSettings::new(Color::BLACK, 1.0);
    let mut ctx = ToolContext { layers: &mut layers, view: &mut view, brush: &brush };
    a.on_pointer_down(input(1.0, 1.0), &mut ctx).unwrap();
    assert!(a.is_active());
    assert!(!b.is_active());
    a.on_cancel();
    assert!(!a.is_active());
}

#[test]
fn test_radius_clamped() {
    let mut brush = BrushSettings::new(Color::BLACK, 0.0);
    assert_eq!(brush.radius(), 1.0);
    brush.set_radius(500.0);
    assert_eq!(brush.radius(), 50.0);
    brush.set_radius(f64::NAN);
    assert_eq!(brush.radius(), 50.0);
}

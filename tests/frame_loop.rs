use fractal_canvas::fractal::triangle_count;
use fractal_canvas::{
    Color, DrawOp, DrawingConfig, DrawingSession, FrameCompositor, FrameScheduler, InputEvent,
    Palette, RecordingSurface,
};
use egui::{Pos2, pos2, vec2};
use std::cell::Cell;

struct FixedPalette(Color);

impl Palette for FixedPalette {
    fn next_color(&mut self) -> Color {
        self.0
    }
}

#[derive(Default)]
struct CountingScheduler {
    requests: Cell<usize>,
}

impl FrameScheduler for CountingScheduler {
    fn request_next_frame(&self) {
        self.requests.set(self.requests.get() + 1);
    }
}

fn session() -> DrawingSession {
    DrawingSession::new(Box::new(FixedPalette(Color::from_rgb(200.0, 60.0, 30.0))))
}

fn drag(session: &mut DrawingSession, from: Pos2, to: Pos2) {
    session.handle_event(&InputEvent::PointerDown { position: from });
    session.handle_event(&InputEvent::PointerMove { position: to });
    session.handle_event(&InputEvent::PointerUp { position: to });
}

fn trail_squares(ops: &[DrawOp]) -> Vec<(Pos2, Color)> {
    // The first fill is the background.
    ops.iter()
        .skip(1)
        .filter_map(|op| match op {
            DrawOp::FillRect { min, color, .. } => Some((*min, *color)),
            _ => None,
        })
        .collect()
}

#[test]
fn test_trail_grows_one_point_per_frame() {
    let compositor = FrameCompositor::default();
    let mut session = session();
    let mut surface = RecordingSurface::new(vec2(400.0, 400.0));
    let scheduler = CountingScheduler::default();

    for i in 0..5 {
        session.handle_event(&InputEvent::PointerMove {
            position: pos2(i as f32 * 10.0, 0.0),
        });
        compositor.step(&mut session, &mut surface, &scheduler);
    }

    let points: Vec<_> = session.trail().iter().collect();
    assert_eq!(
        points,
        vec![
            pos2(0.0, 0.0),
            pos2(10.0, 0.0),
            pos2(20.0, 0.0),
            pos2(30.0, 0.0),
            pos2(40.0, 0.0)
        ]
    );
    assert_eq!(scheduler.requests.get(), 5);
}

#[test]
fn test_stationary_pointer_keeps_growing_trail() {
    let compositor = FrameCompositor::default();
    let mut session = session();
    let mut surface = RecordingSurface::new(vec2(400.0, 400.0));
    let scheduler = CountingScheduler::default();

    session.handle_event(&InputEvent::PointerMove {
        position: pos2(7.0, 7.0),
    });
    for _ in 0..50 {
        compositor.step(&mut session, &mut surface, &scheduler);
    }
    assert_eq!(session.trail().len(), 50);
}

#[test]
fn test_trail_decays_oldest_first_after_leave() {
    let compositor = FrameCompositor::default();
    let mut session = session();
    let mut surface = RecordingSurface::new(vec2(400.0, 400.0));
    let scheduler = CountingScheduler::default();

    for i in 0..4 {
        session.handle_event(&InputEvent::PointerMove {
            position: pos2(i as f32, i as f32),
        });
        compositor.step(&mut session, &mut surface, &scheduler);
    }

    session.handle_event(&InputEvent::PointerLeave);
    compositor.step(&mut session, &mut surface, &scheduler);

    let points: Vec<_> = session.trail().iter().collect();
    assert_eq!(points, vec![pos2(1.0, 1.0), pos2(2.0, 2.0), pos2(3.0, 3.0)]);

    for _ in 0..10 {
        compositor.step(&mut session, &mut surface, &scheduler);
    }
    assert!(session.trail().is_empty());
}

#[test]
fn test_trail_painted_newest_first_with_cumulative_fade() {
    let compositor = FrameCompositor::default();
    let config = compositor.config().clone();
    let mut session = session();
    let scheduler = CountingScheduler::default();
    let mut surface = RecordingSurface::new(vec2(400.0, 400.0));

    for i in 0..3 {
        session.handle_event(&InputEvent::PointerMove {
            position: pos2(i as f32 * 10.0, 5.0),
        });
        surface.clear_ops();
        compositor.step(&mut session, &mut surface, &scheduler);
    }

    let squares = trail_squares(surface.ops());
    assert_eq!(
        squares,
        vec![
            (pos2(20.0, 5.0), config.trail_color),
            (pos2(10.0, 5.0), config.trail_color.fade(0.7)),
            (pos2(0.0, 5.0), config.trail_color.fade(0.7).fade(0.7)),
        ]
    );
}

#[test]
fn test_committed_rectangle_painted_with_outline_diagonals_and_fractal() {
    let compositor = FrameCompositor::default();
    let mut session = session();
    drag(&mut session, pos2(0.0, 0.0), pos2(200.0, 150.0));
    session.handle_event(&InputEvent::PointerLeave);

    let mut surface = RecordingSurface::new(vec2(400.0, 400.0));
    compositor.step(&mut session, &mut surface, &CountingScheduler::default());
    let ops = surface.ops();

    let outline = Color::BLACK;
    assert_eq!(
        ops[1],
        DrawOp::StrokeRect {
            p1: pos2(0.0, 0.0),
            p2: pos2(200.0, 150.0),
            width: 5.0,
            color: outline,
        }
    );
    assert_eq!(
        ops[2],
        DrawOp::Line {
            from: pos2(0.0, 0.0),
            to: pos2(200.0, 150.0),
            width: 5.0,
            color: outline,
        }
    );
    assert_eq!(
        ops[3],
        DrawOp::Line {
            from: pos2(200.0, 0.0),
            to: pos2(0.0, 150.0),
            width: 5.0,
            color: outline,
        }
    );

    // 150 / 128 gives one level of recursion.
    let fills = ops
        .iter()
        .filter(|op| matches!(op, DrawOp::FillPolygon { .. }))
        .count();
    let strokes = ops
        .iter()
        .filter(|op| matches!(op, DrawOp::Polyline { .. }))
        .count();
    assert_eq!(fills, triangle_count(1));
    assert_eq!(strokes, triangle_count(1));

    // Each triangle is stroked before it is filled.
    match (&ops[4], &ops[5]) {
        (
            DrawOp::Polyline {
                points: stroked, ..
            },
            DrawOp::FillPolygon {
                points: filled, ..
            },
        ) => {
            assert_eq!(stroked, filled);
            assert_eq!(stroked.len(), 4);
            assert_eq!(stroked[0], stroked[1]);
        }
        other => panic!("unexpected ops {:?}", other),
    }
}

#[test]
fn test_rectangles_drawn_in_commit_order() {
    let compositor = FrameCompositor::default();
    let mut session = session();
    drag(&mut session, pos2(0.0, 0.0), pos2(50.0, 50.0));
    drag(&mut session, pos2(60.0, 60.0), pos2(90.0, 90.0));

    let mut surface = RecordingSurface::new(vec2(400.0, 400.0));
    compositor.step(&mut session, &mut surface, &CountingScheduler::default());

    let outlines: Vec<_> = surface
        .ops()
        .iter()
        .filter_map(|op| match op {
            DrawOp::StrokeRect { p1, width, .. } if *width == 5.0 => Some(*p1),
            _ => None,
        })
        .collect();
    assert_eq!(outlines, vec![pos2(0.0, 0.0), pos2(60.0, 60.0)]);
}

#[test]
fn test_rectangles_unchanged_across_frames() {
    let compositor = FrameCompositor::default();
    let mut session = session();
    drag(&mut session, pos2(10.0, 10.0), pos2(50.0, 70.0));
    let before = session.document().rectangles().to_vec();

    let mut surface = RecordingSurface::new(vec2(400.0, 400.0));
    let scheduler = CountingScheduler::default();
    for _ in 0..10 {
        compositor.step(&mut session, &mut surface, &scheduler);
    }

    assert_eq!(session.document().rectangles(), before.as_slice());
}

#[test]
fn test_custom_config_changes_pattern() {
    let mut config = DrawingConfig::default();
    config.fractal.depth_step = 32.0;
    let compositor = FrameCompositor::new(config);
    let mut session = session();
    drag(&mut session, pos2(0.0, 0.0), pos2(100.0, 100.0));
    session.handle_event(&InputEvent::PointerLeave);

    let mut surface = RecordingSurface::new(vec2(400.0, 400.0));
    compositor.step(&mut session, &mut surface, &CountingScheduler::default());

    // 100 / 32 gives three levels.
    let fills = surface
        .ops()
        .iter()
        .filter(|op| matches!(op, DrawOp::FillPolygon { .. }))
        .count();
    assert_eq!(fills, triangle_count(3));
}

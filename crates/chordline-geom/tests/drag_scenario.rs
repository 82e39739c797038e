use approx::assert_relative_eq;
use chordline_geom::{
    build_scene, Circle, Point2D, PointerEvent, Primitive, Role, SceneStyle, Session, StatusLines,
};

/// Window of 700 × 700 logical pixels, as the exercise opens with.
const SIZE: f32 = 700.0;

fn px(x: f32, y: f32) -> Point2D {
    Point2D::from_pixels(x, y, SIZE, SIZE)
}

fn drag_px(session: &mut Session, from: (f32, f32), path: &[(f32, f32)]) -> Option<Primitive> {
    session.handle(PointerEvent::Down(px(from.0, from.1)));
    for &(x, y) in path {
        session.handle(PointerEvent::Move(px(x, y)));
    }
    session.handle(PointerEvent::Up).finalized
}

#[test]
fn circle_then_horizontal_diameter() {
    let mut session = Session::new();

    // Center of the surface to the right edge: unit circle.
    let first = drag_px(&mut session, (350.0, 350.0), &[(500.0, 300.0), (700.0, 350.0)]);
    assert_eq!(
        first,
        Some(Primitive::Circle(Circle { center: Point2D::origin(), radius: 1.0 }))
    );

    // Left edge to right edge through the center.
    let second = drag_px(&mut session, (0.0, 350.0), &[(700.0, 350.0)]);
    assert!(matches!(second, Some(Primitive::Segment(_))));

    let hits = session.intersections().unwrap().as_ref().unwrap();
    assert_eq!(hits.len(), 2);
    assert_relative_eq!(hits.points()[0].x, 1.0);
    assert_relative_eq!(hits.points()[1].x, -1.0);

    let status = StatusLines::from_session(&session);
    assert_eq!(status.primitive, "Circle: center (0.00, 0.00) radius = 1.00");

    let roles: Vec<Role> = build_scene(&session, &SceneStyle::default())
        .iter()
        .map(|i| i.role)
        .collect();
    assert_eq!(
        roles,
        [Role::Circle, Role::Segment, Role::Intersection, Role::Intersection]
    );
}

#[test]
fn finished_session_ignores_further_drags() {
    let mut session = Session::new();
    drag_px(&mut session, (350.0, 350.0), &[(420.0, 350.0)]);
    drag_px(&mut session, (100.0, 100.0), &[(600.0, 600.0)]);
    let snapshot = session.clone();

    assert_eq!(drag_px(&mut session, (10.0, 10.0), &[(20.0, 20.0)]), None);
    assert_eq!(session, snapshot);
}

#[test]
fn abandoned_press_leaves_no_primitive() {
    let mut session = Session::new();
    assert_eq!(drag_px(&mut session, (350.0, 350.0), &[]), None);
    assert!(session.circle().is_none());
    assert!(session.capture().is_dragging());

    // The same drag completes once the pointer moves.
    session.handle(PointerEvent::Move(px(385.0, 350.0)));
    let fx = session.handle(PointerEvent::Up);
    assert!(fx.redraw);
    assert_relative_eq!(session.circle().unwrap().radius, 0.1, epsilon = 1e-6);
}

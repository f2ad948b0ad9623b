#![allow(clippy::unwrap_used)]

use filletkit::{
    has_self_intersection, DigitizeSession, FeatureSink, FilletConfig, FilletError, Point2,
    RadiusStep, SessionError, SessionState,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn p(x: f64, y: f64) -> Point2 {
    Point2::new(x, y)
}

/// Host-side store collecting committed features.
#[derive(Default)]
struct LayerStore {
    features: Vec<Vec<Point2>>,
}

impl FeatureSink for LayerStore {
    fn append_feature(&mut self, points: &[Point2]) {
        self.features.push(points.to_vec());
    }
}

fn session(default_radius: f64) -> DigitizeSession {
    DigitizeSession::new(FilletConfig {
        default_radius,
        segments_per_quarter_turn: 6,
        ..FilletConfig::default()
    })
    .unwrap()
}

#[test]
fn digitize_square_with_mixed_radii() {
    init_tracing();
    let mut store = LayerStore::default();
    let mut s = session(2.0);

    s.add_waypoint(p(0.0, 0.0));
    s.add_waypoint(p(20.0, 0.0));
    // Tighter corner at (20, 0).
    s.decrement_pending_radius(RadiusStep::Fine);
    s.add_waypoint(p(20.0, 20.0));

    let preview = s.preview(p(0.0, 20.0));
    assert!(preview.valid);
    assert_eq!(preview.points.first(), Some(&p(0.0, 0.0)));
    assert_eq!(preview.points.last(), Some(&p(0.0, 20.0)));

    let committed = s.finish(p(0.0, 20.0), &mut store).unwrap().unwrap();
    assert_eq!(committed, preview.points);
    assert_eq!(store.features, vec![committed.clone()]);
    assert!(!has_self_intersection(&committed));

    // Corner 1 used radius 1, corner 2 the default 2.
    assert!((committed[1].x - 19.0).abs() < 1e-9, "{}", committed[1]);
    let second_arc_start = committed
        .iter()
        .position(|q| (q.x - 20.0).abs() < 1e-9 && (q.y - 18.0).abs() < 1e-9);
    assert!(second_arc_start.is_some());

    assert_eq!(s.state(), SessionState::Idle);
}

#[test]
fn tight_serpentine_rejected_until_radius_reduced() {
    init_tracing();
    let mut store = LayerStore::default();
    let mut s = session(5.0);
    for q in [p(0.0, 0.0), p(10.0, 0.0), p(10.0, 2.0), p(0.0, 2.0)] {
        s.add_waypoint(q);
    }

    assert!(!s.preview(p(0.0, 4.0)).valid);
    let err = s.finish(p(0.0, 4.0), &mut store).unwrap_err();
    match err {
        FilletError::Session(SessionError::SelfIntersecting {
            first_segment,
            second_segment,
        }) => assert!(second_segment >= first_segment + 2),
        other => panic!("unexpected error: {other}"),
    }
    assert!(store.features.is_empty());
    assert_eq!(
        s.waypoints(),
        &[p(0.0, 0.0), p(10.0, 0.0), p(10.0, 2.0), p(0.0, 2.0)]
    );

    s.set_default_radius(0.5);
    assert!(s.preview(p(0.0, 4.0)).valid);
    let committed = s.finish(p(0.0, 4.0), &mut store).unwrap().unwrap();
    assert_eq!(store.features.len(), 1);
    assert_eq!(committed.first(), Some(&p(0.0, 0.0)));
    assert_eq!(committed.last(), Some(&p(0.0, 4.0)));
}

#[test]
fn rejection_message_names_segments() {
    let err = FilletError::from(SessionError::SelfIntersecting {
        first_segment: 3,
        second_segment: 7,
    });
    assert_eq!(
        err.to_string(),
        "invalid geometry: segments 3 and 7 intersect, reduce radius"
    );
}

#[test]
fn undo_all_then_redo_all() {
    init_tracing();
    let mut s = session(2.0);
    let clicks = [p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0), p(20.0, 10.0)];
    for (i, q) in clicks.iter().enumerate() {
        s.add_waypoint(*q);
        if i == 1 {
            s.increment_pending_radius(RadiusStep::Coarse);
        }
    }
    let full = (s.waypoints().to_vec(), s.radii().clone());
    assert_eq!(s.radii().get(1), Some(12.0));

    let mut undone = 0;
    while s.undo() {
        undone += 1;
    }
    assert_eq!(undone, 5);
    assert_eq!(s.state(), SessionState::Idle);

    while s.redo() {}
    assert_eq!((s.waypoints().to_vec(), s.radii().clone()), full);
}

#[test]
fn cursor_on_last_waypoint_does_not_duplicate() {
    let s = {
        let mut s = session(2.0);
        s.add_waypoint(p(0.0, 0.0));
        s.add_waypoint(p(10.0, 0.0));
        s
    };
    let preview = s.preview(p(10.0, 0.0));
    assert_eq!(preview.points, vec![p(0.0, 0.0), p(10.0, 0.0)]);
    assert!(preview.valid);
}

#[test]
fn degree_scale_shape_is_accepted() {
    init_tracing();
    let mut store = LayerStore::default();
    let scale = 1e-6;
    let mut s = DigitizeSession::new(FilletConfig {
        default_radius: scale,
        ..FilletConfig::default()
    })
    .unwrap();
    for (x, y) in [(0.0, 0.0), (10.0, 10.0), (12.0, 5.0)] {
        s.add_waypoint(p(x * scale, y * scale));
    }
    let end = p(8.0 * scale, 2.0 * scale);

    assert!(s.preview(end).valid);
    let committed = s.finish(end, &mut store).unwrap().unwrap();
    assert_eq!(store.features, vec![committed]);
    assert_eq!(s.state(), SessionState::Idle);
}

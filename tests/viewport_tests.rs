use approx::assert_relative_eq;
use nalgebra::vector;

use ragdoll_backdrop::math::Vec2;
use ragdoll_backdrop::physics::Physics;
use ragdoll_backdrop::viewport::{ContentRect, ViewportSync};

const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

fn rect(id: &str, left: f32, top: f32, width: f32, height: f32) -> ContentRect {
	ContentRect {
		id: Some(id.to_string()),
		left,
		top,
		width,
		height,
	}
}

#[test]
fn rects_map_to_centered_meter_space() {
	let mut physics = Physics::new();
	let mut sync = ViewportSync::new();

	sync.sync(&mut physics, &[rect("a", 100.0, 50.0, 200.0, 100.0)], VIEWPORT);

	let body = physics.rigid_body_set.get(sync.body("a").unwrap()).unwrap();
	assert!(body.is_fixed());
	assert_relative_eq!(*body.translation(), vector!(-2.0, 2.0, 0.0), epsilon = 1.0e-5);

	let collider = physics.collider_set.get(body.colliders()[0]).unwrap();
	let cuboid = collider.shape().as_cuboid().unwrap();
	assert_relative_eq!(cuboid.half_extents, vector!(1.0, 0.5, 0.5), epsilon = 1.0e-5);
}

#[test]
fn repeated_sync_reuses_bodies() {
	let mut physics = Physics::new();
	let mut sync = ViewportSync::new();
	let rects = [rect("a", 100.0, 50.0, 200.0, 100.0), rect("b", 400.0, 300.0, 50.0, 50.0)];

	sync.sync(&mut physics, &rects, VIEWPORT);
	let handle = sync.body("a").unwrap();
	let bodies = physics.rigid_body_set.len();
	let colliders = physics.collider_set.len();

	sync.sync(&mut physics, &rects, VIEWPORT);

	assert_eq!(sync.body("a"), Some(handle));
	assert_eq!(physics.rigid_body_set.len(), bodies);
	assert_eq!(physics.collider_set.len(), colliders);
}

#[test]
fn vanished_rects_are_evicted() {
	let mut physics = Physics::new();
	let mut sync = ViewportSync::new();

	sync.sync(&mut physics, &[rect("a", 0.0, 0.0, 100.0, 100.0), rect("b", 200.0, 0.0, 100.0, 100.0)], VIEWPORT);
	assert_eq!(sync.len(), 2);
	let survivor = sync.body("a").unwrap();

	sync.sync(&mut physics, &[rect("a", 0.0, 0.0, 100.0, 100.0)], VIEWPORT);

	assert_eq!(sync.len(), 1);
	assert_eq!(sync.body("a"), Some(survivor));
	assert!(sync.body("b").is_none());
	assert_eq!(physics.rigid_body_set.len(), 1);
	assert_eq!(physics.collider_set.len(), 1);
}

#[test]
fn unnamed_rects_fall_back_to_positional_identity() {
	let mut physics = Physics::new();
	let mut sync = ViewportSync::new();

	sync.sync(&mut physics, &[ContentRect {
		id: None,
		left: 350.0,
		top: 250.0,
		width: 100.0,
		height: 100.0,
	}], VIEWPORT);

	let body = physics.rigid_body_set.get(sync.body("p0").unwrap()).unwrap();
	assert_relative_eq!(*body.translation(), vector!(0.0, 0.0, 0.0), epsilon = 1.0e-5);
}

#[test]
fn scrolling_moves_posts_without_resizing_them() {
	let mut physics = Physics::new();
	let mut sync = ViewportSync::new();

	sync.sync(&mut physics, &[rect("a", 100.0, 50.0, 200.0, 100.0)], VIEWPORT);

	// Same element scrolled up and reported wider; only the position tracks.
	sync.sync(&mut physics, &[rect("a", 100.0, -150.0, 400.0, 100.0)], VIEWPORT);

	let body = physics.rigid_body_set.get(sync.body("a").unwrap()).unwrap();
	assert_relative_eq!(*body.translation(), vector!(-1.0, 4.0, 0.0), epsilon = 1.0e-5);

	let collider = physics.collider_set.get(body.colliders()[0]).unwrap();
	let cuboid = collider.shape().as_cuboid().unwrap();
	assert_relative_eq!(cuboid.half_extents, vector!(1.0, 0.5, 0.5), epsilon = 1.0e-5);
}

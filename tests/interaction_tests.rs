use std::time::Duration;

use approx::assert_relative_eq;
use nalgebra::vector;

use ragdoll_backdrop::camera::Camera;
use ragdoll_backdrop::descriptor::{BodyDescriptor, FrameDescriptor, ShapeKind};
use ragdoll_backdrop::factory::spawn_body;
use ragdoll_backdrop::interaction::Interaction;
use ragdoll_backdrop::math::{Point2, Point3, Rot3, Vec2};
use ragdoll_backdrop::physics::Physics;
use ragdoll_backdrop::proxy::ProxyRegistry;

const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

/// A single box floating straight in front of the camera, plus the cursor.
fn scene() -> (Physics, ProxyRegistry, Interaction, Camera) {
	let mut physics = Physics::new();
	let mut proxies = ProxyRegistry::new();

	spawn_body(&mut physics, &mut proxies, &BodyDescriptor {
		name: "target".to_string(),
		shape: ShapeKind::Box,
		size: Some(vector!(1.0, 1.0, 1.0)),
		radius: None,
		height: None,
		mass: 1.0,
		transform: FrameDescriptor {
			position: Point3::new(0.0, 2.2, 0.0),
			quaternion: Rot3::identity(),
		},
		linear_damping: 0.02,
		angular_damping: 0.02,
	});

	let interaction = Interaction::new(&mut physics);
	physics.query_pipeline.update(&physics.rigid_body_set, &physics.collider_set);

	let camera = Camera::new(VIEWPORT.x / VIEWPORT.y);

	(physics, proxies, interaction, camera)
}

#[test]
fn center_ray_points_down_negative_z() {
	let camera = Camera::new(VIEWPORT.x / VIEWPORT.y);
	let ray = camera.screen_ray(Point2::new(400.0, 300.0), VIEWPORT);

	assert_relative_eq!(ray.origin, Point3::new(0.0, 2.2, 18.0), epsilon = 1.0e-5);
	assert_relative_eq!(ray.dir, vector!(0.0, 0.0, -1.0), epsilon = 1.0e-5);
}

#[test]
fn drag_lifecycle_creates_and_removes_one_constraint() {
	let (mut physics, proxies, mut interaction, camera) = scene();

	interaction.pointer_down(&mut physics, &proxies, &camera, Point2::new(400.0, 300.0), VIEWPORT);
	assert!(interaction.dragging());
	assert_eq!(physics.impulse_joint_set.len(), 1);

	interaction.release(&mut physics);
	assert!(!interaction.dragging());
	assert_eq!(physics.impulse_joint_set.len(), 0);

	// Releasing with nothing held is a no-op.
	interaction.release(&mut physics);
	assert_eq!(physics.impulse_joint_set.len(), 0);
}

#[test]
fn missed_pick_leaves_no_constraint() {
	let (mut physics, proxies, mut interaction, camera) = scene();

	interaction.pointer_down(&mut physics, &proxies, &camera, Point2::new(10.0, 10.0), VIEWPORT);

	assert!(!interaction.dragging());
	assert_eq!(physics.impulse_joint_set.len(), 0);
}

#[test]
fn cursor_is_not_pickable() {
	let (mut physics, _, mut interaction, camera) = scene();

	// Proxy-less scene: only the cursor could be hit, and it is excluded.
	let empty = ProxyRegistry::new();
	interaction.pointer_down(&mut physics, &empty, &camera, Point2::new(400.0, 300.0), VIEWPORT);

	assert!(!interaction.dragging());
}

#[test]
fn cursor_follows_the_focal_plane() {
	let (mut physics, _proxies, mut interaction, camera) = scene();

	interaction.pointer_move(&mut physics, &camera, Point2::new(400.0, 300.0), VIEWPORT);
	physics.step(Duration::from_secs_f32(1.0 / 60.0));

	let cursor = physics.rigid_body_set.get(interaction.cursor()).unwrap();
	assert_relative_eq!(*cursor.translation(), vector!(0.0, 2.2, 0.0), epsilon = 1.0e-4);
}

#[test]
fn orientation_is_ignored_until_enabled() {
	let (mut physics, _proxies, mut interaction, _camera) = scene();
	let default_gravity = physics.gravity;

	interaction.set_orientation(&mut physics, 90.0, 0.0);
	assert_eq!(physics.gravity, default_gravity);

	interaction.enable_motion();
	interaction.set_orientation(&mut physics, 90.0, 0.0);

	assert_relative_eq!(physics.gravity, vector!(9.82, -9.82, 0.0), epsilon = 1.0e-5);
}

#[test]
fn orientation_remaps_both_angles() {
	let (mut physics, _proxies, mut interaction, _camera) = scene();

	interaction.enable_motion();
	interaction.set_orientation(&mut physics, 30.0, 90.0);

	assert_relative_eq!(physics.gravity, vector!(9.82 * 0.5, 0.0, 0.0), epsilon = 1.0e-5);
}

#[test]
fn long_stall_advances_simulation_by_bounded_amount() {
	let mut physics = Physics::new();

	physics.step_bounded(Duration::from_secs(5));

	// Never the full stall: at most max_substeps fixed steps.
	assert!(physics.time > 0.0);
	assert!(physics.time <= 3.0 / 60.0 + 1.0e-5);
}

#[test]
fn steady_frames_track_real_time() {
	let mut physics = Physics::new();

	for _ in 0..60 {
		physics.step_bounded(Duration::from_secs_f32(1.0 / 60.0));
	}

	assert_relative_eq!(physics.time, 1.0, epsilon = 0.05);
}

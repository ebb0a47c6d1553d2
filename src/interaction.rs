use rapier3d::prelude::*;

use crate::camera::Camera;
use crate::math::{cast_ray_on_plane, Isometry3, Point2, Vec2, PI};
use crate::physics::Physics;
use crate::proxy::ProxyRegistry;

const GRAVITY_STRENGTH: f32 = 9.82;
const CURSOR_RADIUS: f32 = 0.01;

/// Pointer and device-orientation input. Dragging works by tethering the
/// picked body to a kinematic cursor body with a point joint; the cursor is
/// moved directly, immune to forces, but pulls whatever is attached.
pub struct Interaction {
	cursor: RigidBodyHandle,
	drag_joint: Option<ImpulseJointHandle>,
	motion_enabled: bool,
}

impl Interaction {
	pub fn new(physics: &mut Physics) -> Self {
		let cursor = physics.rigid_body_set.insert(RigidBodyBuilder::kinematic_position_based().build());
		physics.collider_set.insert_with_parent(ColliderBuilder::ball(CURSOR_RADIUS), cursor, &mut physics.rigid_body_set);

		Interaction {
			cursor,
			drag_joint: None,
			motion_enabled: false,
		}
	}

	pub fn cursor(&self) -> RigidBodyHandle {
		self.cursor
	}

	pub fn dragging(&self) -> bool {
		self.drag_joint.is_some()
	}

	pub fn motion_enabled(&self) -> bool {
		self.motion_enabled
	}

	/// Picks the body whose proxy is under the pointer and tethers it to the
	/// cursor with a zero-offset point joint.
	pub fn pointer_down(&mut self, physics: &mut Physics, proxies: &ProxyRegistry, camera: &Camera, pointer: Point2, viewport: Vec2) {
		let ray = camera.screen_ray(pointer, viewport);

		let pickable = |_handle: ColliderHandle, collider: &Collider| {
			collider.parent().map_or(false, |body| proxies.contains(body))
		};
		let filter = QueryFilter::default()
			.exclude_rigid_body(self.cursor)
			.predicate(&pickable);

		let hit = physics.query_pipeline.cast_ray(&physics.rigid_body_set,
		                                          &physics.collider_set,
		                                          &ray,
		                                          camera.far(),
		                                          true,
		                                          filter);

		if let Some((collider, toi)) = hit {
			let body = match physics.collider_set.get(collider).and_then(Collider::parent) {
				Some(body) => body,
				None => return,
			};

			let point = ray.point_at(toi);
			if let Some(cursor) = physics.rigid_body_set.get_mut(self.cursor) {
				cursor.set_translation(point.coords, true);
				cursor.set_next_kinematic_translation(point.coords);
			}

			let joint = SphericalJointBuilder::new().build();
			self.drag_joint = Some(physics.impulse_joint_set.insert(body, self.cursor, joint, true));
		}
	}

	/// Drives the cursor along the camera's focal plane under the pointer.
	pub fn pointer_move(&mut self, physics: &mut Physics, camera: &Camera, pointer: Point2, viewport: Vec2) {
		let ray = camera.screen_ray(pointer, viewport);

		if let Some(point) = cast_ray_on_plane(Isometry3::identity(), ray) {
			if let Some(cursor) = physics.rigid_body_set.get_mut(self.cursor) {
				cursor.set_next_kinematic_translation(point.coords);
			}
		}
	}

	/// Drops the active drag tether. Doing so without one is a no-op.
	pub fn release(&mut self, physics: &mut Physics) {
		if let Some(joint) = self.drag_joint.take() {
			physics.impulse_joint_set.remove(joint, true);
		}
	}

	/// Opt-in gate for orientation input. Needed because sensor access
	/// requires a user gesture on some platforms.
	pub fn enable_motion(&mut self) {
		self.motion_enabled = true;
	}

	/// Remaps device orientation angles (degrees) to the gravity vector.
	/// One-way override, default gravity is never restored.
	pub fn set_orientation(&mut self, physics: &mut Physics, gamma: f32, beta: f32) {
		if !self.motion_enabled {
			return;
		}

		let gx = GRAVITY_STRENGTH * (gamma * PI / 180.0).sin();
		let gy = -GRAVITY_STRENGTH * (beta * PI / 180.0).cos();

		physics.gravity = vector!(gx, gy, 0.0);
	}
}

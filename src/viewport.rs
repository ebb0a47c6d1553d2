use std::collections::{HashMap, HashSet};
use rapier3d::prelude::*;

use crate::config;
use crate::math::Vec2;
use crate::physics::Physics;

/// On-screen rectangle of one tracked content element, in CSS pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentRect {
	/// Stable identifier attribute, when the element carries one.
	pub id: Option<String>,
	pub left: f32,
	pub top: f32,
	pub width: f32,
	pub height: f32,
}

/// Keeps exactly one static collider aligned with every visible content
/// block, converted from pixel space to simulation space.
pub struct ViewportSync {
	posts: HashMap<String, RigidBodyHandle>,
}

impl ViewportSync {
	pub fn new() -> Self {
		ViewportSync {
			posts: HashMap::new(),
		}
	}

	pub fn len(&self) -> usize {
		self.posts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.posts.is_empty()
	}

	pub fn body(&self, id: &str) -> Option<RigidBodyHandle> {
		self.posts.get(id).copied()
	}

	/// One sync pass: creates colliders for newly seen elements, repositions
	/// surviving ones and evicts the rest. Half extents are fixed at creation
	/// time, later size changes are not reflected.
	pub fn sync(&mut self, physics: &mut Physics, rects: &[ContentRect], viewport: Vec2) {
		let config = config::get();
		let scale = config.scale;
		let mut seen = HashSet::new();

		for (index, rect) in rects.iter().enumerate() {
			// Positional fallback identity is unstable across reordering.
			let id = rect.id.clone().unwrap_or_else(|| format!("p{}", index));

			// Re-centered on the viewport middle, screen-down flipped to -Y.
			let cx = (rect.left + rect.width / 2.0 - viewport.x / 2.0) * scale;
			let cy = (viewport.y / 2.0 - (rect.top + rect.height / 2.0)) * scale;

			let handle = match self.posts.get(&id) {
				Some(&handle) => handle,
				None => {
					let handle = physics.rigid_body_set.insert(RigidBodyBuilder::fixed().build());
					let collider = ColliderBuilder::cuboid(rect.width * scale / 2.0,
					                                       rect.height * scale / 2.0,
					                                       config.post_depth);
					physics.collider_set.insert_with_parent(collider, handle, &mut physics.rigid_body_set);
					self.posts.insert(id.clone(), handle);

					handle
				},
			};

			if let Some(body) = physics.rigid_body_set.get_mut(handle) {
				body.set_translation(vector!(cx, cy, 0.0), false);
			}

			seen.insert(id);
		}

		let vanished = self.posts.keys()
		                         .filter(|id| !seen.contains(*id))
		                         .cloned()
		                         .collect::<Vec<_>>();

		for id in vanished {
			if let Some(handle) = self.posts.remove(&id) {
				physics.rigid_body_set.remove(handle,
				                              &mut physics.island_manager,
				                              &mut physics.collider_set,
				                              &mut physics.impulse_joint_set,
				                              &mut physics.multibody_joint_set,
				                              true);
			}
		}
	}
}

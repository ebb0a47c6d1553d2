use rapier3d::prelude::*;

use crate::descriptor::{BodyDescriptor, ShapeKind};
use crate::math::Vec3;
use crate::physics::Physics;
use crate::proxy::{ProxyRegistry, ProxyShape};

/// Smallest cylinder section of a composite capsule, keeps the geometry
/// non-degenerate when height <= 2 * radius.
pub const MIN_CYLINDER_HEIGHT: f32 = 0.001;
/// Half extents substituted when the shape kind is missing or unknown.
pub const FALLBACK_HALF_EXTENT: f32 = 0.2;

/// Builds one simulation body with its collision geometry and a matching
/// visual proxy. Construction never fails: unknown shapes get a small box.
pub fn spawn_body(physics: &mut Physics, proxies: &mut ProxyRegistry, desc: &BodyDescriptor) -> RigidBodyHandle {
	let builder = if desc.mass > 0.0 {
		RigidBodyBuilder::dynamic()
	} else {
		RigidBodyBuilder::fixed()
	};

	let body = builder.position(desc.transform.isometry())
	                  .linear_damping(desc.linear_damping)
	                  .angular_damping(desc.angular_damping)
	                  .build();
	let handle = physics.rigid_body_set.insert(body);

	let shape = match desc.shape {
		ShapeKind::Box => {
			let half_extents = desc.size.unwrap_or_else(fallback_half_extents);
			attach(physics, handle, ColliderBuilder::cuboid(half_extents.x, half_extents.y, half_extents.z).mass(desc.mass));

			ProxyShape::Box { half_extents }
		},
		ShapeKind::Sphere => {
			let radius = desc.radius.unwrap_or(FALLBACK_HALF_EXTENT);
			attach(physics, handle, ColliderBuilder::ball(radius).mass(desc.mass));

			ProxyShape::Sphere { radius }
		},
		ShapeKind::Cylinder => {
			let radius = desc.radius.unwrap_or(FALLBACK_HALF_EXTENT);
			let height = desc.height.unwrap_or(radius * 2.0);
			attach(physics, handle, ColliderBuilder::cylinder(height / 2.0, radius).mass(desc.mass));

			ProxyShape::Cylinder { radius, half_height: height / 2.0 }
		},
		ShapeKind::Capsule => {
			let radius = desc.radius.unwrap_or(FALLBACK_HALF_EXTENT);
			let height = desc.height.unwrap_or(radius * 2.0);

			// Composite capsule: cylinder section plus two end balls.
			let cylinder_height = (height - 2.0 * radius).max(MIN_CYLINDER_HEIGHT);
			let offset = cylinder_height / 2.0;
			attach(physics, handle, ColliderBuilder::cylinder(cylinder_height / 2.0, radius).mass(desc.mass));
			attach(physics, handle, ColliderBuilder::ball(radius).translation(vector!(0.0, offset, 0.0)).mass(0.0));
			attach(physics, handle, ColliderBuilder::ball(radius).translation(vector!(0.0, -offset, 0.0)).mass(0.0));

			ProxyShape::Capsule { radius, half_height: cylinder_height / 2.0 + radius }
		},
		ShapeKind::Unknown => {
			let half_extents = desc.size.unwrap_or_else(fallback_half_extents);
			attach(physics, handle, ColliderBuilder::cuboid(half_extents.x, half_extents.y, half_extents.z).mass(desc.mass));

			ProxyShape::Box { half_extents }
		},
	};

	proxies.insert(handle, shape);

	handle
}

fn attach(physics: &mut Physics, body: RigidBodyHandle, collider: ColliderBuilder) {
	physics.collider_set.insert_with_parent(collider, body, &mut physics.rigid_body_set);
}

fn fallback_half_extents() -> Vec3 {
	vector!(FALLBACK_HALF_EXTENT, FALLBACK_HALF_EXTENT, FALLBACK_HALF_EXTENT)
}

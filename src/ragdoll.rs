use linked_hash_map::LinkedHashMap;
use rapier3d::prelude::*;

use crate::config;
use crate::descriptor::{BodyDescriptor, ConstraintDescriptor, ConstraintKind, FrameDescriptor, RagdollDescriptor, ShapeKind};
use crate::factory::spawn_body;
use crate::math::{Point3, Rot3, PI};
use crate::physics::Physics;
use crate::proxy::ProxyRegistry;

/// Swing limit applied to cone-twist joints, per angular axis.
const SWING_LIMIT: f32 = PI / 4.0;
/// Twist limit applied to cone-twist joints around the joint axis.
const TWIST_LIMIT: f32 = PI / 2.0;

/// Live bodies keyed by descriptor name, in document order.
pub struct BodyRegistry {
	bodies: LinkedHashMap<String, RigidBodyHandle>,
}

impl BodyRegistry {
	pub fn new() -> Self {
		BodyRegistry {
			bodies: LinkedHashMap::new(),
		}
	}

	pub fn insert(&mut self, name: impl Into<String>, handle: RigidBodyHandle) {
		let name = name.into();

		if self.bodies.insert(name.clone(), handle).is_some() {
			dprintln!("Duplicate body name `{}`, keeping the later one", name);
		}
	}

	pub fn get(&self, name: &str) -> Option<RigidBodyHandle> {
		self.bodies.get(name).copied()
	}

	pub fn len(&self) -> usize {
		self.bodies.len()
	}

	pub fn is_empty(&self) -> bool {
		self.bodies.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, RigidBodyHandle)> {
		self.bodies.iter().map(|(name, &handle)| (&**name, handle))
	}
}

/// Instantiates every body of the document, then every constraint whose
/// endpoints resolve. Unresolved constraints are skipped without affecting
/// the rest of the build.
pub fn build(physics: &mut Physics, proxies: &mut ProxyRegistry, descriptor: &RagdollDescriptor) -> BodyRegistry {
	let mut registry = BodyRegistry::new();

	for desc in &descriptor.bodies {
		let handle = spawn_body(physics, proxies, desc);
		registry.insert(desc.name.clone(), handle);
	}

	for constraint in &descriptor.constraints {
		add_constraint(physics, &registry, constraint);
	}

	registry
}

pub fn add_constraint(physics: &mut Physics, registry: &BodyRegistry, desc: &ConstraintDescriptor) -> Option<ImpulseJointHandle> {
	let (body1, body2) = match (registry.get(&desc.object1), registry.get(&desc.object2)) {
		(Some(body1), Some(body2)) => (body1, body2),
		_ => {
			dprintln!("Skipping constraint `{}`-`{}`: unresolved body name", desc.object1, desc.object2);
			return None;
		},
	};

	let mut joint: GenericJoint = match desc.kind {
		ConstraintKind::Point => {
			SphericalJointBuilder::new()
				.local_anchor1(desc.frame_a.position)
				.local_anchor2(desc.frame_b.position)
				.build()
				.into()
		},
		ConstraintKind::Hinge => {
			let mut joint: GenericJoint = RevoluteJointBuilder::new(desc.frame_a.axis())
				.local_anchor1(desc.frame_a.position)
				.local_anchor2(desc.frame_b.position)
				.build()
				.into();
			joint.set_local_axis2(desc.frame_b.axis());

			joint
		},
		ConstraintKind::ConeTwist => {
			let mut joint: GenericJoint = SphericalJointBuilder::new()
				.local_anchor1(desc.frame_a.position)
				.local_anchor2(desc.frame_b.position)
				.build()
				.into();
			joint.set_limits(JointAxis::AngX, [-SWING_LIMIT, SWING_LIMIT])
			     .set_limits(JointAxis::AngY, [-SWING_LIMIT, SWING_LIMIT])
			     .set_limits(JointAxis::AngZ, [-TWIST_LIMIT, TWIST_LIMIT]);

			joint
		},
		// Unrecognized joints become a rigid attachment.
		ConstraintKind::Lock | ConstraintKind::Unknown => {
			FixedJointBuilder::new()
				.local_frame1(desc.frame_a.isometry())
				.local_frame2(desc.frame_b.isometry())
				.build()
				.into()
		},
	};

	joint.contacts_enabled = !desc.disable_collisions;

	Some(physics.impulse_joint_set.insert(body1, body2, joint, true))
}

/// Fills the scene with minimal two-segment ragdolls so it is never empty.
pub fn spawn_demo(physics: &mut Physics, proxies: &mut ProxyRegistry, count: usize) -> BodyRegistry {
	let config = config::get();
	let mut registry = BodyRegistry::new();

	for i in 0..count {
		let x = (i as f32 - 1.0) * config.demo.spacing;
		let y = 4.0 + i as f32 * 0.3;

		let pelvis = spawn_body(physics, proxies, &demo_body(
			format!("demo_pelvis_{}", i),
			ShapeKind::Box,
			Point3::new(x, y, 0.0),
			4.0,
		));
		registry.insert(format!("demo_pelvis_{}", i), pelvis);

		let head = spawn_body(physics, proxies, &demo_body(
			format!("demo_head_{}", i),
			ShapeKind::Sphere,
			Point3::new(x, y + 1.0, 0.0),
			1.5,
		));
		registry.insert(format!("demo_head_{}", i), head);

		let joint = SphericalJointBuilder::new()
			.local_anchor1(point!(0.0, 0.4, 0.0))
			.local_anchor2(point!(0.0, -0.2, 0.0))
			.build();
		physics.impulse_joint_set.insert(pelvis, head, joint, true);
	}

	registry
}

fn demo_body(name: String, shape: ShapeKind, position: Point3, mass: f32) -> BodyDescriptor {
	let config = config::get();

	BodyDescriptor {
		name,
		shape,
		size: Some(vector!(0.35, 0.2, 0.18)),
		radius: Some(0.18),
		height: None,
		mass,
		transform: FrameDescriptor {
			position,
			quaternion: Rot3::identity(),
		},
		linear_damping: config.body.linear_damping,
		angular_damping: config.body.angular_damping,
	}
}

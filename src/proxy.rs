use std::collections::HashMap;
use rapier3d::prelude::{RigidBodyHandle, RigidBodySet};

use crate::math::{Color, Point3, Rot3, Vec3};

/// Translucent debug mesh mirroring one physics body. Doubles as the
/// pointer-pick target. Owns no simulated state, its pose is copied from
/// the body every frame.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualProxy {
	pub shape: ProxyShape,
	pub position: Point3,
	pub rotation: Rot3,
	pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProxyShape {
	Box { half_extents: Vec3 },
	Sphere { radius: f32 },
	Cylinder { radius: f32, half_height: f32 },
	Capsule { radius: f32, half_height: f32 },
}

/// Arena of proxies with a parallel body-keyed index.
pub struct ProxyRegistry {
	proxies: Vec<VisualProxy>,
	by_body: HashMap<RigidBodyHandle, usize>,
}

impl ProxyRegistry {
	pub fn new() -> Self {
		ProxyRegistry {
			proxies: Vec::new(),
			by_body: HashMap::new(),
		}
	}

	pub fn insert(&mut self, body: RigidBodyHandle, shape: ProxyShape) {
		self.by_body.insert(body, self.proxies.len());
		self.proxies.push(VisualProxy {
			shape,
			position: Point3::origin(),
			rotation: Rot3::identity(),
			color: Color::new(0.72, 0.7, 1.0, 1.0).opacity(0.25),
		});
	}

	pub fn contains(&self, body: RigidBodyHandle) -> bool {
		self.by_body.contains_key(&body)
	}

	pub fn get(&self, body: RigidBodyHandle) -> Option<&VisualProxy> {
		self.by_body.get(&body).map(|&index| &self.proxies[index])
	}

	pub fn proxies(&self) -> &[VisualProxy] {
		&self.proxies
	}

	pub fn len(&self) -> usize {
		self.proxies.len()
	}

	pub fn is_empty(&self) -> bool {
		self.proxies.is_empty()
	}

	/// Copies every tracked body's pose onto its proxy.
	pub fn sync_poses(&mut self, bodies: &RigidBodySet) {
		for (&handle, &index) in &self.by_body {
			if let Some(body) = bodies.get(handle) {
				let proxy = &mut self.proxies[index];
				proxy.position = Point3::from(*body.translation());
				proxy.rotation = *body.rotation();
			}
		}
	}
}

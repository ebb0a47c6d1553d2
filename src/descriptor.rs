use nalgebra::Unit;
use serde::{Deserialize, Deserializer};

use crate::math::{Isometry3, Point3, Rot3, Translation3, Vec3};

/// Parsed ragdoll document: named bodies plus the constraints between them.
/// Field names follow the wire format of the fetched JSON.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct RagdollDescriptor {
	#[serde(default)] pub bodies: Vec<BodyDescriptor>,
	#[serde(default)] pub constraints: Vec<ConstraintDescriptor>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct BodyDescriptor {
	pub name: String,
	#[serde(default)] pub shape: ShapeKind,
	/// Half extents, for boxes.
	#[serde(default)] pub size: Option<Vec3>,
	#[serde(default)] pub radius: Option<f32>,
	#[serde(default)] pub height: Option<f32>,
	#[serde(default)] pub mass: f32,
	#[serde(default)] pub transform: FrameDescriptor,
	#[serde(rename = "linearDamping", default = "default_linear_damping")] pub linear_damping: f32,
	#[serde(rename = "angularDamping", default = "default_angular_damping")] pub angular_damping: f32,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ConstraintDescriptor {
	#[serde(rename = "type", default)] pub kind: ConstraintKind,
	pub object1: String,
	pub object2: String,
	#[serde(rename = "frameA", default)] pub frame_a: FrameDescriptor,
	#[serde(rename = "frameB", default)] pub frame_b: FrameDescriptor,
	#[serde(rename = "disableCollisions", default)] pub disable_collisions: bool,
}

/// Local offset plus an orientation encoding the joint axis.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct FrameDescriptor {
	#[serde(default = "Point3::origin")] pub position: Point3,
	#[serde(default = "Rot3::identity")] pub quaternion: Rot3,
}

impl FrameDescriptor {
	pub fn isometry(&self) -> Isometry3 {
		Isometry3::from_parts(Translation3::from(self.position), self.quaternion)
	}

	/// The physical joint axis: the canonical forward axis (0,0,1) rotated
	/// by this frame's orientation.
	pub fn axis(&self) -> Unit<Vec3> {
		Unit::new_normalize(self.quaternion * Vec3::z())
	}
}

impl Default for FrameDescriptor {
	fn default() -> Self {
		FrameDescriptor {
			position: Point3::origin(),
			quaternion: Rot3::identity(),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
	Box,
	Sphere,
	Cylinder,
	Capsule,
	/// Anything the document may grow in the future. Substituted with a
	/// small box at build time instead of failing the whole load.
	Unknown,
}

impl Default for ShapeKind {
	fn default() -> Self {
		ShapeKind::Unknown
	}
}

impl<'de> Deserialize<'de> for ShapeKind {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		Ok(match &*String::deserialize(deserializer)? {
			"BOX" => ShapeKind::Box,
			"SPHERE" => ShapeKind::Sphere,
			"CYLINDER" => ShapeKind::Cylinder,
			"CAPSULE" => ShapeKind::Capsule,
			_ => ShapeKind::Unknown,
		})
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
	Point,
	Hinge,
	ConeTwist,
	Lock,
	/// Unrecognized joints become full 6-DOF locks at build time.
	Unknown,
}

impl Default for ConstraintKind {
	fn default() -> Self {
		ConstraintKind::Unknown
	}
}

impl<'de> Deserialize<'de> for ConstraintKind {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		Ok(match &*String::deserialize(deserializer)? {
			"POINT" => ConstraintKind::Point,
			"HINGE" => ConstraintKind::Hinge,
			"CONE_TWIST" => ConstraintKind::ConeTwist,
			"LOCK" => ConstraintKind::Lock,
			_ => ConstraintKind::Unknown,
		})
	}
}

fn default_linear_damping() -> f32 {
	crate::config::get().body.linear_damping
}

fn default_angular_damping() -> f32 {
	crate::config::get().body.angular_damping
}

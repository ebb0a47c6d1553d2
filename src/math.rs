use std::ops::{Deref, DerefMut};
use nalgebra::vector;

pub use std::f32::consts::PI;

pub type Vec2 = nalgebra::Vector2<f32>;
pub type Vec3 = nalgebra::Vector3<f32>;
pub type Vec4 = nalgebra::Vector4<f32>;

pub type Point2 = nalgebra::Point2<f32>;
pub type Point3 = nalgebra::Point3<f32>;

pub type Rot3 = nalgebra::UnitQuaternion<f32>;
pub type Translation3 = nalgebra::Translation3<f32>;
pub type Isometry3 = nalgebra::Isometry3<f32>;
pub type Perspective3 = nalgebra::Perspective3<f32>;

pub type Ray = rapier3d::geometry::Ray;

pub fn cast_ray_on_plane(plane: Isometry3, ray: Ray) -> Option<Point3> {
	let norm = plane.transform_vector(&Vec3::z_axis());
	let origin = plane.transform_point(&Point3::origin());
	let toi = (origin - ray.origin).dot(&norm) / ray.dir.dot(&norm);

	if toi.is_nan() || toi < 0.0 {
		None
	} else {
		let intersection = ray.point_at(toi);
		Some(plane.inverse_transform_point(&intersection))
	}
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color(Vec4);

impl Color {
	pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self { Color(vector!(r, g, b, a)) }

	pub fn black()       -> Self { Color(vector!(0.0, 0.0, 0.0, 1.0)) }
	pub fn white()       -> Self { Color(vector!(1.0, 1.0, 1.0, 1.0)) }
	pub fn transparent() -> Self { Color(vector!(0.0, 0.0, 0.0, 0.0)) }

	pub fn opacity(self, opacity: f32) -> Self { Color(vector!(self.x, self.y, self.z, self.w * opacity)) }
}

impl Deref for Color {
	type Target = Vec4;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl DerefMut for Color {
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.0
	}
}

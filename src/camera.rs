use crate::config;
use crate::math::{Isometry3, Perspective3, Point2, Point3, Ray, Vec2, PI};

/// Fixed perspective camera looking down -Z at the simulation plane.
pub struct Camera {
	pub position: Isometry3,
	projection: Perspective3,
}

impl Camera {
	pub fn new(aspect: f32) -> Self {
		let config = config::get();

		Camera {
			position: Isometry3::translation(config.camera.position.x,
			                                 config.camera.position.y,
			                                 config.camera.position.z),
			projection: Perspective3::new(aspect,
			                              config.camera.fov * PI / 180.0,
			                              config.camera.near,
			                              config.camera.far),
		}
	}

	pub fn set_aspect(&mut self, aspect: f32) {
		self.projection.set_aspect(aspect);
	}

	pub fn projection(&self) -> &Perspective3 {
		&self.projection
	}

	pub fn far(&self) -> f32 {
		self.projection.zfar()
	}

	/// World-space ray from the camera through a pointer position, both in
	/// CSS pixels.
	pub fn screen_ray(&self, pointer: Point2, viewport: Vec2) -> Ray {
		let ndc_x = (pointer.x / viewport.x) * 2.0 - 1.0;
		let ndc_y = -(pointer.y / viewport.y) * 2.0 + 1.0;

		let near = self.projection.unproject_point(&Point3::new(ndc_x, ndc_y, -1.0));
		let origin = self.position * Point3::origin();
		let dir = (self.position * near - origin).normalize();

		Ray::new(origin, dir)
	}
}

use std::ops::Deref;
use std::sync::Arc;
use serde_derive::{Deserialize, Serialize};
use arc_swap::ArcSwap;
use lazy_static::lazy_static;

use crate::math::Vec3;

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Config {
	/// DOM pixels to meters scale factor.
	pub scale: f32,
	/// Half depth of post colliders, towards the camera.
	pub post_depth: f32,
	/// Minimum interval between scroll-triggered collider syncs, in milliseconds.
	pub scroll_throttle_ms: u64,
	/// Camera configuration.
	pub camera: CameraConfig,
	/// Fixed-step integration configuration.
	pub simulation: SimulationConfig,
	/// Fallback demo ragdolls.
	pub demo: DemoConfig,
	/// Body defaults.
	pub body: BodyConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct CameraConfig {
	/// Vertical field of view, in degrees.
	pub fov: f32,
	/// Camera position. Looks down -Z.
	pub position: Vec3,
	/// Near clipping plane.
	pub near: f32,
	/// Far clipping plane.
	pub far: f32,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SimulationConfig {
	/// Logical steps per second.
	pub rate: f32,
	/// Most logical steps a single frame may catch up.
	pub max_substeps: u32,
	/// Upper bound on the wall-clock delta fed to the integrator, in seconds.
	pub max_frame_delta: f32,
	/// Default gravity. Overridden once device orientation is enabled.
	pub gravity: Vec3,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct DemoConfig {
	/// Number of fallback ragdolls when no descriptor is available.
	pub count: usize,
	/// Lateral offset between fallback ragdolls, in meters.
	pub spacing: f32,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct BodyConfig {
	/// Linear damping applied when the descriptor leaves it out.
	pub linear_damping: f32,
	/// Angular damping applied when the descriptor leaves it out.
	pub angular_damping: f32,
}

impl Default for Config {
	fn default() -> Self {
		toml::from_str(include_str!("../config.toml")).expect("Bad config during compilation")
	}
}

lazy_static! {
	static ref CONFIG: ArcSwap<Config> = ArcSwap::default();
}

pub fn get() -> impl Deref<Target = Arc<Config>> + 'static {
	CONFIG.load()
}

pub fn set(config: Config) {
	CONFIG.store(Arc::new(config));
}

pub fn rcu(update: impl Fn(&mut Config)) {
	CONFIG.rcu(|current| {
		let mut new = (**current).clone();
		update(&mut new);
		new
	});
}

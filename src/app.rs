use std::path::Path;
use std::time::Duration;
use err_derive::Error;

use crate::assets::{self, AssetError, ModelAsset};
use crate::camera::Camera;
use crate::config;
use crate::descriptor::RagdollDescriptor;
use crate::interaction::Interaction;
use crate::math::{Point2, Vec2};
use crate::physics::Physics;
use crate::proxy::{ProxyRegistry, VisualProxy};
use crate::ragdoll::{self, BodyRegistry};
use crate::utils::Throttle;
use crate::viewport::{ContentRect, ViewportSync};

/// DOM boundary: viewport dimensions and the rectangles of tracked content
/// elements, queried on demand.
pub trait ContentSource {
	fn viewport(&self) -> Vec2;
	fn content_rects(&self) -> Vec<ContentRect>;
}

/// Rendering engine boundary. Consumes one frame description per tick.
pub trait Renderer {
	fn render(&mut self, frame: Frame);
}

pub struct Frame<'a> {
	pub model: &'a ModelAsset,
	pub proxies: &'a [VisualProxy],
	pub camera: &'a Camera,
}

/// Semantic page events, delivered through a single dispatcher in arrival
/// order.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
	PointerDown(Point2),
	PointerMove(Point2),
	PointerUp,
	PointerCancel,
	Scroll,
	Resize,
	EnableMotion,
	Orientation { gamma: f32, beta: f32 },
}

/// One scene per page load. Owns the world, the registries and the input
/// state; constructed once and driven by `handle_event` and `frame`.
pub struct App {
	pub physics: Physics,
	pub proxies: ProxyRegistry,
	pub registry: BodyRegistry,
	pub camera: Camera,
	pub interaction: Interaction,
	pub viewport_sync: ViewportSync,
	model: ModelAsset,
	scroll_throttle: Throttle,
	viewport: Vec2,
	descriptor_loaded: bool,
}

impl App {
	/// Builds the whole scene. A missing or empty descriptor degrades to the
	/// demo ragdolls; the model is required and checked by `boot`.
	pub fn new(model: ModelAsset, descriptor: Option<RagdollDescriptor>, source: &impl ContentSource) -> App {
		let config = config::get();
		let mut physics = Physics::new();
		let mut proxies = ProxyRegistry::new();

		let descriptor_loaded = descriptor.as_ref().map_or(false, |descriptor| !descriptor.bodies.is_empty());

		let registry = match descriptor {
			Some(ref descriptor) if descriptor_loaded => ragdoll::build(&mut physics, &mut proxies, descriptor),
			_ => ragdoll::spawn_demo(&mut physics, &mut proxies, config.demo.count),
		};

		let interaction = Interaction::new(&mut physics);

		let viewport = source.viewport();
		let mut viewport_sync = ViewportSync::new();
		viewport_sync.sync(&mut physics, &source.content_rects(), viewport);

		// Picking queries the pipeline before the first step runs.
		physics.query_pipeline.update(&physics.rigid_body_set, &physics.collider_set);

		let camera = Camera::new(viewport.x / viewport.y);

		let app = App {
			physics,
			proxies,
			registry,
			camera,
			interaction,
			viewport_sync,
			model,
			scroll_throttle: Throttle::new(Duration::from_millis(config.scroll_throttle_ms)),
			viewport,
			descriptor_loaded,
		};

		dprintln!("{}", app.status());

		app
	}

	pub fn handle_event(&mut self, event: Event, source: &impl ContentSource) {
		match event {
			Event::PointerDown(pointer) => self.interaction.pointer_down(&mut self.physics, &self.proxies, &self.camera, pointer, self.viewport),
			Event::PointerMove(pointer) => self.interaction.pointer_move(&mut self.physics, &self.camera, pointer, self.viewport),
			Event::PointerUp
			| Event::PointerCancel => self.interaction.release(&mut self.physics),
			Event::Scroll => {
				// Throttled for performance, not correctness.
				if self.scroll_throttle.ready() {
					self.viewport_sync.sync(&mut self.physics, &source.content_rects(), self.viewport);
				}
			},
			Event::Resize => {
				self.viewport = source.viewport();
				self.camera.set_aspect(self.viewport.x / self.viewport.y);
				self.viewport_sync.sync(&mut self.physics, &source.content_rects(), self.viewport);
			},
			Event::EnableMotion => self.interaction.enable_motion(),
			Event::Orientation { gamma, beta } => self.interaction.set_orientation(&mut self.physics, gamma, beta),
		}
	}

	/// One animation frame: catch up the integrator, mirror body poses onto
	/// the proxies, render.
	pub fn frame(&mut self, delta_time: Duration, renderer: &mut impl Renderer) {
		self.physics.step_bounded(delta_time);
		self.proxies.sync_poses(&self.physics.rigid_body_set);

		renderer.render(Frame {
			model: &self.model,
			proxies: self.proxies.proxies(),
			camera: &self.camera,
		});
	}

	/// Status readout for the page's indicator element.
	pub fn status(&self) -> String {
		format!("model: ok | descriptor: {} | bodies: {}",
		        if self.descriptor_loaded { "ok" } else { "missing" },
		        self.registry.len())
	}
}

/// Boot sequence. Model load failure is fatal; descriptor load failure is
/// treated as "descriptor absent".
pub fn boot(model_path: impl AsRef<Path>, descriptor_path: impl AsRef<Path>, source: &impl ContentSource) -> Result<App, BootError> {
	let model = assets::load_model(model_path)?;

	let descriptor = match assets::load_descriptor(descriptor_path) {
		Ok(descriptor) => Some(descriptor),
		Err(err) => {
			dprintln!("Ragdoll descriptor unavailable: {}", err);
			None
		},
	};

	Ok(App::new(model, descriptor, source))
}

#[derive(Debug, Error)]
pub enum BootError {
	#[error(display = "{}", _0)] ModelLoad(#[error(source)] AssetError),
}

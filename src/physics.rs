use std::time::Duration;
use rapier3d::prelude::*;

use crate::config;
use crate::math::Vec3;

pub struct Physics {
	pub rigid_body_set: RigidBodySet,
	pub collider_set: ColliderSet,
	pub gravity: Vec3,
	pub integration_parameters: IntegrationParameters,
	pub physics_pipeline: PhysicsPipeline,
	pub query_pipeline: QueryPipeline,
	pub island_manager: IslandManager,
	pub broad_phase: BroadPhaseMultiSap,
	pub narrow_phase: NarrowPhase,
	pub impulse_joint_set: ImpulseJointSet,
	pub multibody_joint_set: MultibodyJointSet,
	pub ccd_solver: CCDSolver,
	pub physics_hooks: (),
	pub event_handler: (),
	/// Total simulated time, in seconds.
	pub time: f32,
	accumulator: f32,
}

impl Physics {
	pub fn new() -> Self {
		let config = config::get();

		Physics {
			rigid_body_set: RigidBodySet::new(),
			collider_set: ColliderSet::new(),
			gravity: config.simulation.gravity,
			integration_parameters: IntegrationParameters {
				erp: 0.8,
				joint_erp: 0.5,
				..IntegrationParameters::default()
			},
			physics_pipeline: PhysicsPipeline::new(),
			query_pipeline: QueryPipeline::new(),
			island_manager: IslandManager::new(),
			broad_phase: BroadPhaseMultiSap::new(),
			narrow_phase: NarrowPhase::new(),
			impulse_joint_set: ImpulseJointSet::new(),
			multibody_joint_set: MultibodyJointSet::new(),
			ccd_solver: CCDSolver::new(),
			physics_hooks: (),
			event_handler: (),
			time: 0.0,
			accumulator: 0.0,
		}
	}

	pub fn step(&mut self, delta_time: Duration) {
		self.integration_parameters.dt = delta_time.as_secs_f32();

		self.physics_pipeline.step(&self.gravity,
		                           &self.integration_parameters,
		                           &mut self.island_manager,
		                           &mut self.broad_phase,
		                           &mut self.narrow_phase,
		                           &mut self.rigid_body_set,
		                           &mut self.collider_set,
		                           &mut self.impulse_joint_set,
		                           &mut self.multibody_joint_set,
		                           &mut self.ccd_solver,
		                           Some(&mut self.query_pipeline),
		                           &self.physics_hooks,
		                           &self.event_handler);

		self.query_pipeline.update(&self.rigid_body_set,
		                           &self.collider_set);

		self.time += self.integration_parameters.dt;
	}

	/// Catches up with real time using fixed logical steps. The wall-clock
	/// delta is clamped so a long stall (tab backgrounding) advances the
	/// integrator by at most `max_substeps` steps instead of the full stall.
	pub fn step_bounded(&mut self, delta_time: Duration) {
		let config = config::get();
		let dt = 1.0 / config.simulation.rate;

		self.accumulator += delta_time.as_secs_f32().min(config.simulation.max_frame_delta);

		let mut substeps = 0;
		while self.accumulator >= dt && substeps < config.simulation.max_substeps {
			self.step(Duration::from_secs_f32(dt));
			self.accumulator -= dt;
			substeps += 1;
		}

		if substeps == config.simulation.max_substeps {
			self.accumulator = 0.0;
		}
	}
}

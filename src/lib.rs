#[macro_use] pub mod debug;
pub mod math;
pub mod config;
pub mod utils;
pub mod assets;
pub mod descriptor;
pub mod physics;
pub mod proxy;
pub mod factory;
pub mod ragdoll;
pub mod viewport;
pub mod camera;
pub mod interaction;
pub mod app;

pub use app::{boot, App, BootError, ContentSource, Event, Frame, Renderer};
pub use assets::ModelAsset;
pub use descriptor::RagdollDescriptor;

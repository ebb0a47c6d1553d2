use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use err_derive::Error;

use crate::descriptor::RagdollDescriptor;

/// Opaque scene-graph asset. The crate never looks inside, it only hands the
/// bytes to the renderer boundary every frame.
#[derive(Debug, Clone)]
pub struct ModelAsset {
	pub name: String,
	pub data: Vec<u8>,
}

pub fn find_asset_path(path: impl AsRef<Path>) -> PathBuf {
	let orig_path = Path::new("assets").join(path.as_ref());
	let override_path = Path::new("assets_overrides").join(path.as_ref());

	if override_path.exists() {
		override_path
	} else {
		orig_path
	}
}

/// Loads the 3D model. Failure here is fatal to boot.
pub fn load_model(path: impl AsRef<Path>) -> Result<ModelAsset, AssetError> {
	let asset_path = find_asset_path(&path);
	let name = path.as_ref().to_string_lossy().to_string();

	let mut data = Vec::new();
	File::open(&asset_path)
		.and_then(|mut file| file.read_to_end(&mut data))
		.map_err(|err| AssetError::Io(name.clone(), err))?;

	Ok(ModelAsset { name, data })
}

/// Loads and parses the ragdoll descriptor document. Callers treat failure
/// as "descriptor absent" and fall back to the demo ragdolls.
pub fn load_descriptor(path: impl AsRef<Path>) -> Result<RagdollDescriptor, AssetError> {
	let asset_path = find_asset_path(&path);
	let name = path.as_ref().to_string_lossy().to_string();

	let file = File::open(&asset_path).map_err(|err| AssetError::Io(name.clone(), err))?;

	serde_json::from_reader(BufReader::new(file)).map_err(|err| AssetError::Parse(name, err))
}

#[derive(Debug, Error)]
pub enum AssetError {
	#[error(display = "Unable to load asset `{}`: {}", _0, _1)] Io(String, #[error(source, no_from)] std::io::Error),
	#[error(display = "Unable to parse asset `{}`: {}", _0, _1)] Parse(String, #[error(source, no_from)] serde_json::Error),
}

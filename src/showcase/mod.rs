pub mod meshes;
pub mod plugin;
pub mod systems;
pub mod types;

pub use meshes::*;
pub use plugin::*;
pub use systems::*;
pub use types::*;

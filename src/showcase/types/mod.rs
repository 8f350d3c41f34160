//! Type definitions for the portfolio showcase
//!
//! This module is organized into submodules:
//! - `scene` - Mesh markers, spin / float state and the hover flag
//! - `camera` - Camera markers, orbit controller and scene viewport layout
//! - `theme` - Light / dark palettes
//! - `settings` - RON settings with scene defaults
//! - `content` - Page text loaded from the bundled asset
//! - `ui` - UI markers for the page shell

pub mod camera;
pub mod content;
pub mod scene;
pub mod settings;
pub mod theme;
pub mod ui;

// Re-export all public types for convenient access
pub use camera::*;
pub use content::*;
pub use scene::*;
pub use settings::*;
pub use theme::*;
pub use ui::*;

//! Systems for the portfolio showcase
//!
//! This module is organized into submodules:
//! - `setup` - Startup system that builds cameras, lights, knot and ground
//! - `page` - Page UI and its entrance fade
//! - `navigation` - Section links, column scrolling, external links
//! - `form` - Contact form focus and typing
//! - `motion` - Spin and float of the knot
//! - `hover` - Pointer observers, colour swap and caption
//! - `camera` - Orbit controller and viewport fitting
//! - `theme` - Light / dark toggle

pub mod camera;
pub mod form;
pub mod hover;
pub mod motion;
pub mod navigation;
pub mod page;
pub mod setup;
pub mod theme;

pub use camera::*;
pub use form::*;
pub use hover::*;
pub use motion::*;
pub use navigation::*;
pub use page::*;
pub use setup::*;
pub use theme::*;

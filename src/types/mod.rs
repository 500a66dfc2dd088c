//! Data types shared by the layout engine, the table and the renderers.

mod cell;
mod config;
mod event;
mod geometry;

pub use cell::*;
pub use config::*;
pub use event::*;
pub use geometry::*;

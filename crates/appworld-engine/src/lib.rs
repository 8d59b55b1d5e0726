//! AppWorld engine crate.
//!
//! This crate owns the scene graph and the geometry it is expressed in.
//! Rendering, input and physics are left to the host application.

pub mod coords;
pub mod logging;
pub mod scene;

//! Fixed-step platformer simulation: one player body, a static set of
//! platforms, keyboard-driven input, and a rectangle-fill renderer contract.

mod error;
mod geom;
mod input;
mod params;
mod physics;
mod render;
mod replay;
mod session;
mod sim;
mod world;

pub use error::{Error, Result};
pub use geom::{rects_intersect, Rect};
pub use input::{Buttons, FrameInput, InputState, Key};
pub use params::Params;
pub use physics::{clamp_to_world, integrate, resolve_platforms, step, try_jump, Body, Events};
pub use render::{render, Palette, Surface};
pub use replay::{Replay, Start, TraceRow};
pub use session::Session;
pub use sim::Sim;
pub use world::default_platforms;

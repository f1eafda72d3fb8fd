//! # Animatics
//!
//! Composable animation combinators. Host view primitives (opacity, transform,
//! position, ...) are wrapped as leaf [`Animation`]s or [`TargetAnimation`]s and
//! composed into trees:
//!
//! - [`Simultaneous`] runs two animations together (`a + b`)
//! - [`Sequential`] runs two animations back to back (`a >> b`)
//! - [`Repeat`] runs one animation `n` times
//! - [`Endless`] reruns one animation forever
//!
//! Everything is single-threaded and callback driven: completions are delivered
//! by the host, usually from its frame callback.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod animation;
pub mod errors;

pub use animation::{
    Animation, AnimationExt, AnimationSettings, Completion, Curve, Endless, FnAnimation,
    FnTargetAnimation, Repeat, Sequential, SequentialTarget, SettingsPreset, SettingsSetter,
    SettingsSetterExt, SettingsSettersWrapper, Simultaneous, SimultaneousTarget, Spring,
    TargetAnimation, TargetAnimationExt, Targeted,
};
pub use errors::{AnimaticsError, Result};

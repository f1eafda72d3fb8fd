pub mod settings;
pub mod leaf;
pub mod simultaneous;
pub mod sequential;
pub mod repeat;
pub mod endless;
pub mod target;
pub mod ops;
mod relay;

use std::rc::Rc;

use smallvec::SmallVec;

pub use settings::{AnimationSettings, Curve, SettingsPreset, Spring};
pub use leaf::{FnAnimation, FnTargetAnimation, Targeted};
pub use simultaneous::Simultaneous;
pub use sequential::Sequential;
pub use repeat::Repeat;
pub use endless::Endless;
pub use target::{SequentialTarget, SimultaneousTarget};
pub use ops::{AnimationExt, SettingsSetterExt, TargetAnimationExt};

/// Completion callback. Called once, always with `true`.
pub type Completion = Box<dyn FnOnce(bool)>;

/// Accepts settings updates and passes them down to its leaves.
pub trait SettingsSetter {
    fn update_settings(&self, update: &dyn Fn(&mut AnimationSettings));
}

/// A combinator exposing its children for settings propagation.
pub trait SettingsSettersWrapper {
    fn settings_setters(&self) -> SmallVec<[&dyn SettingsSetter; 2]>;

    /// Forwards `update` to every child.
    fn update_children(&self, update: &dyn Fn(&mut AnimationSettings)) {
        for setter in self.settings_setters() {
            setter.update_settings(update);
        }
    }
}

/// Something that can animate and report completion.
pub trait Animation: SettingsSetter {
    /// Starts the animation. `completion` fires once the animation finishes.
    fn animate(&self, completion: Option<Completion>);
}

/// Something that, given a target value, produces an [`Animation`].
pub trait TargetAnimation: SettingsSetter {
    type Target;
    type Output: Animation;

    fn to(&self, target: Self::Target) -> Self::Output;
}

// ============================================================================
// Pointer forwarding
// ============================================================================

impl<S: SettingsSetter + ?Sized> SettingsSetter for Box<S> {
    fn update_settings(&self, update: &dyn Fn(&mut AnimationSettings)) {
        (**self).update_settings(update);
    }
}

impl<S: SettingsSetter + ?Sized> SettingsSetter for Rc<S> {
    fn update_settings(&self, update: &dyn Fn(&mut AnimationSettings)) {
        (**self).update_settings(update);
    }
}

impl<A: Animation + ?Sized> Animation for Box<A> {
    fn animate(&self, completion: Option<Completion>) {
        (**self).animate(completion);
    }
}

impl<A: Animation + ?Sized> Animation for Rc<A> {
    fn animate(&self, completion: Option<Completion>) {
        (**self).animate(completion);
    }
}

impl<T: TargetAnimation + ?Sized> TargetAnimation for Box<T> {
    type Target = T::Target;
    type Output = T::Output;

    fn to(&self, target: Self::Target) -> Self::Output {
        (**self).to(target)
    }
}

impl<T: TargetAnimation + ?Sized> TargetAnimation for Rc<T> {
    type Target = T::Target;
    type Output = T::Output;

    fn to(&self, target: Self::Target) -> Self::Output {
        (**self).to(target)
    }
}

/// Calls `completion`, if any, with success.
#[inline]
pub(crate) fn complete(completion: Option<Completion>) {
    if let Some(completion) = completion {
        completion(true);
    }
}

//! Leaf adapters.
//!
//! Hosts plug their view primitives into the combinators by wrapping a closure.
//! The closure receives a snapshot of the leaf's settings and the completion it
//! must eventually call, typically from the view framework's frame callback.

use std::cell::RefCell;
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::animation::{Animation, AnimationSettings, Completion, SettingsSetter, TargetAnimation};

/// An [`Animation`] backed by a host closure.
pub struct FnAnimation<F> {
    settings: RefCell<AnimationSettings>,
    run: F,
}

impl<F> FnAnimation<F>
where
    F: Fn(&AnimationSettings, Completion),
{
    #[must_use]
    pub fn new(run: F) -> Self {
        Self {
            settings: RefCell::new(AnimationSettings::default()),
            run,
        }
    }
}

impl<F> FnAnimation<F> {
    #[must_use]
    pub fn settings(&self) -> AnimationSettings {
        *self.settings.borrow()
    }
}

impl<F> SettingsSetter for FnAnimation<F> {
    fn update_settings(&self, update: &dyn Fn(&mut AnimationSettings)) {
        update(&mut self.settings.borrow_mut());
    }
}

impl<F> Animation for FnAnimation<F>
where
    F: Fn(&AnimationSettings, Completion),
{
    fn animate(&self, completion: Option<Completion>) {
        let settings = self.settings();
        (self.run)(&settings, completion.unwrap_or_else(|| Box::new(|_| {})));
    }
}

impl<F> fmt::Debug for FnAnimation<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnAnimation")
            .field("settings", &self.settings.borrow())
            .finish_non_exhaustive()
    }
}

/// A [`TargetAnimation`] backed by a host closure taking the target value.
pub struct FnTargetAnimation<T, F> {
    settings: RefCell<AnimationSettings>,
    run: Rc<F>,
    _target: PhantomData<fn(T)>,
}

impl<T, F> FnTargetAnimation<T, F>
where
    F: Fn(&AnimationSettings, &T, Completion),
{
    #[must_use]
    pub fn new(run: F) -> Self {
        Self {
            settings: RefCell::new(AnimationSettings::default()),
            run: Rc::new(run),
            _target: PhantomData,
        }
    }
}

impl<T, F> FnTargetAnimation<T, F> {
    #[must_use]
    pub fn settings(&self) -> AnimationSettings {
        *self.settings.borrow()
    }
}

impl<T, F> SettingsSetter for FnTargetAnimation<T, F> {
    fn update_settings(&self, update: &dyn Fn(&mut AnimationSettings)) {
        update(&mut self.settings.borrow_mut());
    }
}

impl<T, F> TargetAnimation for FnTargetAnimation<T, F>
where
    F: Fn(&AnimationSettings, &T, Completion),
{
    type Target = T;
    type Output = Targeted<T, F>;

    /// Binds `target`. The produced animation starts from this leaf's current settings.
    fn to(&self, target: T) -> Targeted<T, F> {
        Targeted {
            settings: RefCell::new(self.settings()),
            target,
            run: Rc::clone(&self.run),
        }
    }
}

/// A [`FnTargetAnimation`] bound to its target value.
pub struct Targeted<T, F> {
    settings: RefCell<AnimationSettings>,
    target: T,
    run: Rc<F>,
}

impl<T, F> Targeted<T, F> {
    #[must_use]
    pub fn target(&self) -> &T {
        &self.target
    }

    #[must_use]
    pub fn settings(&self) -> AnimationSettings {
        *self.settings.borrow()
    }
}

impl<T, F> SettingsSetter for Targeted<T, F> {
    fn update_settings(&self, update: &dyn Fn(&mut AnimationSettings)) {
        update(&mut self.settings.borrow_mut());
    }
}

impl<T, F> Animation for Targeted<T, F>
where
    F: Fn(&AnimationSettings, &T, Completion),
{
    fn animate(&self, completion: Option<Completion>) {
        let settings = self.settings();
        (self.run)(
            &settings,
            &self.target,
            completion.unwrap_or_else(|| Box::new(|_| {})),
        );
    }
}

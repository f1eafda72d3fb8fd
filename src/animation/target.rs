//! Target-waiter combinators.
//!
//! These pair two [`TargetAnimation`]s that wait for the same kind of target.
//! Binding a target resolves both children with it and yields the matching
//! plain combinator.

use smallvec::{SmallVec, smallvec};

use crate::animation::{
    AnimationSettings, Sequential, SettingsSetter, SettingsSettersWrapper, Simultaneous,
    TargetAnimation,
};

/// Resolves both children to the same target and runs them together.
#[derive(Debug, Clone)]
pub struct SimultaneousTarget<T, U> {
    first: T,
    second: U,
}

impl<T, U> SimultaneousTarget<T, U>
where
    T: TargetAnimation,
    U: TargetAnimation<Target = T::Target>,
{
    #[must_use]
    pub fn new(first: T, second: U) -> Self {
        Self { first, second }
    }
}

impl<T, U> TargetAnimation for SimultaneousTarget<T, U>
where
    T: TargetAnimation,
    T::Target: Clone,
    U: TargetAnimation<Target = T::Target>,
{
    type Target = T::Target;
    type Output = Simultaneous<T::Output, U::Output>;

    fn to(&self, target: Self::Target) -> Self::Output {
        Simultaneous::new(self.first.to(target.clone()), self.second.to(target))
    }
}

/// Resolves both children to the same target and runs them one after the other.
#[derive(Debug, Clone)]
pub struct SequentialTarget<T, U> {
    first: T,
    second: U,
}

impl<T, U> SequentialTarget<T, U>
where
    T: TargetAnimation,
    U: TargetAnimation<Target = T::Target>,
{
    #[must_use]
    pub fn new(first: T, second: U) -> Self {
        Self { first, second }
    }
}

impl<T, U> TargetAnimation for SequentialTarget<T, U>
where
    T: TargetAnimation,
    T::Target: Clone,
    U: TargetAnimation<Target = T::Target>,
    U::Output: 'static,
{
    type Target = T::Target;
    type Output = Sequential<T::Output, U::Output>;

    fn to(&self, target: Self::Target) -> Self::Output {
        Sequential::new(self.first.to(target.clone()), self.second.to(target))
    }
}

macro_rules! forward_settings {
    ($($ty:ident),*) => {$(
        impl<T: SettingsSetter, U: SettingsSetter> SettingsSettersWrapper for $ty<T, U> {
            fn settings_setters(&self) -> SmallVec<[&dyn SettingsSetter; 2]> {
                smallvec![&self.first as &dyn SettingsSetter, &self.second as &dyn SettingsSetter]
            }
        }

        impl<T: SettingsSetter, U: SettingsSetter> SettingsSetter for $ty<T, U> {
            fn update_settings(&self, update: &dyn Fn(&mut AnimationSettings)) {
                self.update_children(update);
            }
        }
    )*};
}

forward_settings!(SimultaneousTarget, SequentialTarget);

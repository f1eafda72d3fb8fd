//! Composition API.
//!
//! Extension traits give every animation the combinator constructors, and the
//! crate's own types also get operators:
//!
//! | Expression    | Result                 |
//! |---------------|------------------------|
//! | `a + b`       | `a` and `b` together   |
//! | `a >> b`      | `a`, then `b`          |
//! | `a.repeat(n)` | `a` run `n` times      |
//! | `a.endless()` | `a` rerun forever      |
//!
//! ```rust,ignore
//! let intro = (fade_in + slide_up) >> pulse.repeat(3);
//! intro.with_duration(Duration::from_millis(250)).run();
//!
//! // An endless loop lives as long as its binding.
//! let idle = glow.endless();
//! idle.run();
//! ```

use std::ops::{Add, Shr};
use std::time::Duration;

use crate::animation::settings::seconds;
use crate::animation::{
    Animation, AnimationSettings, Curve, Endless, FnAnimation, FnTargetAnimation, Repeat,
    Sequential, SequentialTarget, SettingsSetter, Simultaneous, SimultaneousTarget, Spring,
    TargetAnimation, Targeted,
};
use crate::errors::Result;

pub trait AnimationExt: Animation + Sized {
    /// Runs `self` and `other` together.
    fn join<B: Animation>(self, other: B) -> Simultaneous<Self, B> {
        Simultaneous::new(self, other)
    }

    /// Runs `self`, then `other`.
    fn then<B: Animation + 'static>(self, other: B) -> Sequential<Self, B> {
        Sequential::new(self, other)
    }

    fn repeat(self, count: usize) -> Repeat<Self> {
        Repeat::new(self, count)
    }

    fn endless(self) -> Endless<Self> {
        Endless::new(self)
    }

    fn boxed(self) -> Box<dyn Animation>
    where
        Self: 'static,
    {
        Box::new(self)
    }

    /// Starts the animation without waiting for it.
    fn run(&self) {
        self.animate(None);
    }

    fn run_then(&self, completion: impl FnOnce(bool) + 'static) {
        self.animate(Some(Box::new(completion)));
    }
}

impl<A: Animation> AnimationExt for A {}

pub trait TargetAnimationExt: TargetAnimation + Sized {
    fn join_target<U>(self, other: U) -> SimultaneousTarget<Self, U>
    where
        U: TargetAnimation<Target = Self::Target>,
    {
        SimultaneousTarget::new(self, other)
    }

    fn then_target<U>(self, other: U) -> SequentialTarget<Self, U>
    where
        U: TargetAnimation<Target = Self::Target>,
    {
        SequentialTarget::new(self, other)
    }
}

impl<T: TargetAnimation> TargetAnimationExt for T {}

/// Builder-style settings helpers. Each one writes through to every leaf.
pub trait SettingsSetterExt: SettingsSetter + Sized {
    #[must_use]
    fn with_duration(self, duration: Duration) -> Self {
        self.update_settings(&|s| s.duration = duration);
        self
    }

    #[must_use]
    fn with_delay(self, delay: Duration) -> Self {
        self.update_settings(&|s| s.delay = delay);
        self
    }

    #[must_use]
    fn with_curve(self, curve: Curve) -> Self {
        self.update_settings(&|s| s.curve = curve);
        self
    }

    #[must_use]
    fn with_spring(self, spring: Spring) -> Self {
        self.update_settings(&|s| s.spring = Some(spring));
        self
    }

    /// Replaces the settings of every leaf.
    #[must_use]
    fn with_settings(self, settings: AnimationSettings) -> Self {
        self.update_settings(&|s| *s = settings);
        self
    }

    fn try_with_duration_secs(self, secs: f32) -> Result<Self> {
        Ok(self.with_duration(seconds("duration", secs)?))
    }

    fn try_with_delay_secs(self, secs: f32) -> Result<Self> {
        Ok(self.with_delay(seconds("delay", secs)?))
    }
}

impl<S: SettingsSetter> SettingsSetterExt for S {}

// ============================================================================
// Operators
// ============================================================================

macro_rules! animation_ops {
    ($($ty:ident<$($g:ident),*>),* $(,)?) => {$(
        impl<$($g,)* Rhs> Add<Rhs> for $ty<$($g),*>
        where
            Self: Animation,
            Rhs: Animation,
        {
            type Output = Simultaneous<Self, Rhs>;

            fn add(self, rhs: Rhs) -> Self::Output {
                Simultaneous::new(self, rhs)
            }
        }

        impl<$($g,)* Rhs> Shr<Rhs> for $ty<$($g),*>
        where
            Self: Animation,
            Rhs: Animation + 'static,
        {
            type Output = Sequential<Self, Rhs>;

            fn shr(self, rhs: Rhs) -> Self::Output {
                Sequential::new(self, rhs)
            }
        }
    )*};
}

macro_rules! target_ops {
    ($($ty:ident<$($g:ident),*>),* $(,)?) => {$(
        impl<$($g,)* Rhs> Add<Rhs> for $ty<$($g),*>
        where
            Self: TargetAnimation,
            Rhs: TargetAnimation<Target = <Self as TargetAnimation>::Target>,
        {
            type Output = SimultaneousTarget<Self, Rhs>;

            fn add(self, rhs: Rhs) -> Self::Output {
                SimultaneousTarget::new(self, rhs)
            }
        }

        impl<$($g,)* Rhs> Shr<Rhs> for $ty<$($g),*>
        where
            Self: TargetAnimation,
            Rhs: TargetAnimation<Target = <Self as TargetAnimation>::Target>,
        {
            type Output = SequentialTarget<Self, Rhs>;

            fn shr(self, rhs: Rhs) -> Self::Output {
                SequentialTarget::new(self, rhs)
            }
        }
    )*};
}

animation_ops!(
    Simultaneous<A, B>,
    Sequential<A, B>,
    Repeat<A>,
    Endless<A>,
    FnAnimation<F>,
    Targeted<T, F>,
);

target_ops!(
    SimultaneousTarget<T, U>,
    SequentialTarget<T, U>,
    FnTargetAnimation<T, F>,
);

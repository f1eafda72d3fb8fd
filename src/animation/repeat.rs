use std::rc::Rc;

use smallvec::{SmallVec, smallvec};

use crate::animation::relay::{Link, Relay};
use crate::animation::{
    Animation, AnimationSettings, Completion, SettingsSetter, SettingsSettersWrapper,
};

/// Runs an animation `count` times in a row, then completes.
///
/// A count of zero completes immediately without touching the animation.
#[derive(Debug)]
pub struct Repeat<A> {
    animation: Rc<A>,
    count: usize,
}

impl<A> Repeat<A> {
    #[must_use]
    pub fn new(animation: A, count: usize) -> Self {
        Self {
            animation: Rc::new(animation),
            count,
        }
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }
}

impl<A: Animation + 'static> Animation for Repeat<A> {
    fn animate(&self, completion: Option<Completion>) {
        log::trace!("Repeat: running {} passes", self.count);
        // The run keeps the child alive until its last pass.
        Relay::start(
            Link::Strong(Rc::clone(&self.animation)),
            Some(self.count),
            completion,
        );
    }
}

impl<A: SettingsSetter> SettingsSettersWrapper for Repeat<A> {
    fn settings_setters(&self) -> SmallVec<[&dyn SettingsSetter; 2]> {
        smallvec![&*self.animation as &dyn SettingsSetter]
    }
}

impl<A: SettingsSetter> SettingsSetter for Repeat<A> {
    fn update_settings(&self, update: &dyn Fn(&mut AnimationSettings)) {
        self.update_children(update);
    }
}

use std::rc::Rc;

use smallvec::{SmallVec, smallvec};

use crate::animation::relay::{Link, Relay};
use crate::animation::{
    Animation, AnimationSettings, Completion, SettingsSetter, SettingsSettersWrapper,
};

/// Reruns an animation after every completion, forever.
///
/// The outer completion is never called. Reruns are driven by a relay that
/// only holds a weak link to the animation: dropping the `Endless` stops the
/// loop at the next completion. Starting a temporary therefore runs a single
/// pass; bind the `Endless` for as long as it should keep looping:
///
/// ```rust,ignore
/// // One pass only: the temporary is dropped at the end of the statement.
/// spinner.endless().run();
///
/// // Loops until `spin` goes out of scope.
/// let spin = spinner.endless();
/// spin.run();
/// ```
///
/// The wrapped animation must complete asynchronously (from the host's frame
/// callback). One that completes inside `animate` keeps the caller spinning.
#[derive(Debug)]
pub struct Endless<A> {
    animation: Rc<A>,
}

impl<A> Endless<A> {
    #[must_use]
    pub fn new(animation: A) -> Self {
        Self {
            animation: Rc::new(animation),
        }
    }
}

impl<A: Animation + 'static> Animation for Endless<A> {
    fn animate(&self, completion: Option<Completion>) {
        log::trace!("Endless: starting");
        drop(completion);
        Relay::start(Link::Weak(Rc::downgrade(&self.animation)), None, None);
    }
}

impl<A: SettingsSetter> SettingsSettersWrapper for Endless<A> {
    fn settings_setters(&self) -> SmallVec<[&dyn SettingsSetter; 2]> {
        smallvec![&*self.animation as &dyn SettingsSetter]
    }
}

impl<A: SettingsSetter> SettingsSetter for Endless<A> {
    fn update_settings(&self, update: &dyn Fn(&mut AnimationSettings)) {
        self.update_children(update);
    }
}

use std::rc::Rc;

use smallvec::{SmallVec, smallvec};

use crate::animation::{
    Animation, AnimationSettings, Completion, SettingsSetter, SettingsSettersWrapper,
};

/// Runs `first`, then `second` once `first` has completed.
///
/// `second` lives behind an `Rc` because it is started from `first`'s
/// completion, after [`Animation::animate`] has returned.
#[derive(Debug)]
pub struct Sequential<A, B> {
    first: A,
    second: Rc<B>,
}

impl<A, B> Sequential<A, B> {
    #[must_use]
    pub fn new(first: A, second: B) -> Self {
        Self {
            first,
            second: Rc::new(second),
        }
    }
}

impl<A: Animation, B: Animation + 'static> Animation for Sequential<A, B> {
    fn animate(&self, completion: Option<Completion>) {
        log::trace!("Sequential: starting first animation");
        let second = Rc::clone(&self.second);
        self.first.animate(Some(Box::new(move |_| {
            log::trace!("Sequential: first finished, starting second");
            second.animate(completion);
        })));
    }
}

impl<A: SettingsSetter, B: SettingsSetter> SettingsSettersWrapper for Sequential<A, B> {
    fn settings_setters(&self) -> SmallVec<[&dyn SettingsSetter; 2]> {
        smallvec![&self.first as &dyn SettingsSetter, &*self.second as &dyn SettingsSetter]
    }
}

impl<A: SettingsSetter, B: SettingsSetter> SettingsSetter for Sequential<A, B> {
    fn update_settings(&self, update: &dyn Fn(&mut AnimationSettings)) {
        self.update_children(update);
    }
}

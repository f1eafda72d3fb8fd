use std::cell::{Cell, RefCell};
use std::rc::Rc;

use smallvec::{SmallVec, smallvec};

use crate::animation::{
    Animation, AnimationSettings, Completion, SettingsSetter, SettingsSettersWrapper, complete,
};

/// Runs two animations together and completes once both have finished.
#[derive(Debug, Clone)]
pub struct Simultaneous<A, B> {
    first: A,
    second: B,
}

impl<A, B> Simultaneous<A, B> {
    #[must_use]
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    #[must_use]
    pub fn into_inner(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A: Animation, B: Animation> Animation for Simultaneous<A, B> {
    fn animate(&self, completion: Option<Completion>) {
        log::trace!("Simultaneous: starting both animations");
        let barrier = Barrier::new(2, completion);
        self.first.animate(Some(barrier.arrival()));
        self.second.animate(Some(barrier.arrival()));
    }
}

impl<A: SettingsSetter, B: SettingsSetter> SettingsSettersWrapper for Simultaneous<A, B> {
    fn settings_setters(&self) -> SmallVec<[&dyn SettingsSetter; 2]> {
        smallvec![&self.first as &dyn SettingsSetter, &self.second as &dyn SettingsSetter]
    }
}

impl<A: SettingsSetter, B: SettingsSetter> SettingsSetter for Simultaneous<A, B> {
    fn update_settings(&self, update: &dyn Fn(&mut AnimationSettings)) {
        self.update_children(update);
    }
}

/// Counts pending completions and fires the outer one when the last arrives.
struct Barrier {
    pending: Cell<usize>,
    completion: RefCell<Option<Completion>>,
}

impl Barrier {
    fn new(pending: usize, completion: Option<Completion>) -> Rc<Self> {
        Rc::new(Self {
            pending: Cell::new(pending),
            completion: RefCell::new(completion),
        })
    }

    fn arrival(self: &Rc<Self>) -> Completion {
        let barrier = Rc::clone(self);
        Box::new(move |_| barrier.arrive())
    }

    fn arrive(&self) {
        let pending = self.pending.get().saturating_sub(1);
        self.pending.set(pending);
        if pending == 0 {
            log::trace!("Simultaneous: all animations finished");
            let completion = self.completion.borrow_mut().take();
            complete(completion);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn barrier_fires_once_on_last_arrival() {
        let fired = Rc::new(Cell::new(0));
        let counter = Rc::clone(&fired);
        let barrier = Barrier::new(
            2,
            Some(Box::new(move |finished| {
                assert!(finished);
                counter.set(counter.get() + 1);
            })),
        );

        let a = barrier.arrival();
        let b = barrier.arrival();
        a(true);
        assert_eq!(fired.get(), 0);
        b(true);
        assert_eq!(fired.get(), 1);
    }
}

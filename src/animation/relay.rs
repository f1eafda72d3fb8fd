//! Re-trigger loop shared by [`Repeat`](super::Repeat) and [`Endless`](super::Endless).
//!
//! A relay runs its child, waits for the child's completion, then decides
//! whether to run another pass. Completions delivered while the child's
//! `animate` call is still on the stack are recorded and handled by the loop
//! in [`Relay::pump`]; completions delivered later re-enter `pump`. Either way
//! the stack depth stays constant no matter how many passes run.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::animation::{Animation, Completion, complete};

/// How the relay reaches its child.
pub(crate) enum Link<A> {
    /// Keeps the child alive until the relay finishes.
    Strong(Rc<A>),
    /// Stops the relay once the owner of the child has been dropped.
    Weak(Weak<A>),
}

impl<A> Link<A> {
    fn upgrade(&self) -> Option<Rc<A>> {
        match self {
            Link::Strong(animation) => Some(Rc::clone(animation)),
            Link::Weak(animation) => animation.upgrade(),
        }
    }
}

pub(crate) struct Relay<A> {
    animation: Link<A>,
    /// Passes left to run; `None` runs forever.
    remaining: Cell<Option<usize>>,
    completion: RefCell<Option<Completion>>,
    in_pass: Cell<bool>,
    settled_in_pass: Cell<bool>,
    passes: Cell<u64>,
}

impl<A: Animation + 'static> Relay<A> {
    pub(crate) fn start(animation: Link<A>, passes: Option<usize>, completion: Option<Completion>) {
        let relay = Rc::new(Self {
            animation,
            remaining: Cell::new(passes),
            completion: RefCell::new(completion),
            in_pass: Cell::new(false),
            settled_in_pass: Cell::new(false),
            passes: Cell::new(0),
        });
        relay.pump();
    }

    fn pump(self: Rc<Self>) {
        loop {
            match self.remaining.get() {
                Some(0) => {
                    log::trace!("Relay: finished after {} passes", self.passes.get());
                    let completion = self.completion.borrow_mut().take();
                    complete(completion);
                    return;
                }
                Some(n) => self.remaining.set(Some(n - 1)),
                None => {}
            }

            let Some(animation) = self.animation.upgrade() else {
                log::debug!(
                    "Relay: animation dropped after {} passes, stopping",
                    self.passes.get()
                );
                return;
            };

            self.passes.set(self.passes.get() + 1);
            self.in_pass.set(true);
            self.settled_in_pass.set(false);

            let relay = Rc::clone(&self);
            animation.animate(Some(Box::new(move |_| relay.settle())));
            drop(animation);

            self.in_pass.set(false);
            if !self.settled_in_pass.get() {
                // The child completes later and re-enters through `settle`.
                return;
            }
        }
    }

    fn settle(self: Rc<Self>) {
        if self.in_pass.get() {
            self.settled_in_pass.set(true);
        } else {
            self.pump();
        }
    }
}

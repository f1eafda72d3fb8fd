//! Shared test fixtures.
//!
//! [`Stage`] stands in for the host view layer: its leaves log when they start
//! and hold their completion until the test finishes them, which models
//! completions arriving later from a frame callback.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use animatics::{AnimationSettings, Completion, FnAnimation, FnTargetAnimation};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Default)]
struct StageState {
    events: RefCell<Vec<String>>,
    pending: RefCell<VecDeque<(String, Completion)>>,
    settings: RefCell<HashMap<String, AnimationSettings>>,
}

impl StageState {
    fn started(&self, name: &str, settings: &AnimationSettings) {
        self.events.borrow_mut().push(format!("start {name}"));
        self.settings.borrow_mut().insert(name.to_string(), *settings);
    }
}

#[derive(Clone, Default)]
pub struct Stage {
    state: Rc<StageState>,
}

impl Stage {
    pub fn new() -> Self {
        init_logging();
        Self::default()
    }

    /// A leaf that completes only when the test calls [`Stage::finish`].
    pub fn leaf(
        &self,
        name: &str,
    ) -> FnAnimation<impl Fn(&AnimationSettings, Completion) + use<>> {
        let state = Rc::clone(&self.state);
        let name = name.to_string();
        FnAnimation::new(move |settings, completion| {
            state.started(&name, settings);
            state
                .pending
                .borrow_mut()
                .push_back((name.clone(), completion));
        })
    }

    /// A leaf that completes inside its own `animate` call.
    pub fn instant(
        &self,
        name: &str,
    ) -> FnAnimation<impl Fn(&AnimationSettings, Completion) + use<>> {
        let state = Rc::clone(&self.state);
        let name = name.to_string();
        FnAnimation::new(move |settings, completion| {
            state.started(&name, settings);
            state.events.borrow_mut().push(format!("end {name}"));
            completion(true);
        })
    }

    /// A target leaf; its start event carries the bound target.
    pub fn mover(
        &self,
        name: &str,
    ) -> FnTargetAnimation<f32, impl Fn(&AnimationSettings, &f32, Completion) + use<>> {
        let state = Rc::clone(&self.state);
        let name = name.to_string();
        FnTargetAnimation::new(move |settings, target: &f32, completion| {
            let label = format!("{name}->{target}");
            state.started(&label, settings);
            state.pending.borrow_mut().push_back((label, completion));
        })
    }

    /// Completes the oldest pending run of `name`. Returns false if none is pending.
    pub fn finish(&self, name: &str) -> bool {
        let entry = {
            let mut pending = self.state.pending.borrow_mut();
            let index = pending.iter().position(|(n, _)| n == name);
            index.and_then(|i| pending.remove(i))
        };
        match entry {
            Some((name, completion)) => {
                self.state.events.borrow_mut().push(format!("end {name}"));
                completion(true);
                true
            }
            None => false,
        }
    }

    /// Completes the oldest pending run, whatever it is.
    pub fn finish_next(&self) -> Option<String> {
        let (name, completion) = self.state.pending.borrow_mut().pop_front()?;
        self.state.events.borrow_mut().push(format!("end {name}"));
        completion(true);
        Some(name)
    }

    /// Completes pending runs until none is left or `limit` runs were finished.
    pub fn finish_all(&self, limit: usize) -> usize {
        let mut finished = 0;
        while finished < limit && self.finish_next().is_some() {
            finished += 1;
        }
        finished
    }

    pub fn events(&self) -> Vec<String> {
        self.state.events.borrow().clone()
    }

    pub fn pending(&self) -> Vec<String> {
        self.state
            .pending
            .borrow()
            .iter()
            .map(|(n, _)| n.clone())
            .collect()
    }

    pub fn starts(&self, name: &str) -> usize {
        let start = format!("start {name}");
        self.state
            .events
            .borrow()
            .iter()
            .filter(|e| **e == start)
            .count()
    }

    /// Settings the leaf saw on its most recent start.
    pub fn settings_of(&self, name: &str) -> Option<AnimationSettings> {
        self.state.settings.borrow().get(name).copied()
    }
}

/// A completion that counts its calls, plus the counter.
pub fn counted() -> (Rc<Cell<usize>>, Completion) {
    let count = Rc::new(Cell::new(0));
    let counter = Rc::clone(&count);
    let completion: Completion = Box::new(move |finished| {
        assert!(finished, "completions always report success");
        counter.set(counter.get() + 1);
    });
    (count, completion)
}

/// A completion that appends `label` to the stage's event log.
pub fn logged(stage: &Stage, label: &str) -> Completion {
    let state = Rc::clone(&stage.state);
    let label = label.to_string();
    Box::new(move |_| state.events.borrow_mut().push(label))
}

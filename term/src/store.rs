//! Redux-like state container for the terminal UI.
//!
//! State lives on the render thread only. Reducers mutate it and describe
//! any I/O they need as an [`effect::Effect`], which the store hands to an
//! [`EffectHandler`]. Results of that I/O come back later as actions.

#[cfg(test)]
use mockall::automock;

use std::{cell::RefCell, rc::Rc};

use crate::store::{action::Action, effect::Effect, state::State};

pub mod action;
pub mod effect;
pub mod lifetime;
pub mod reducer;
pub mod state;

/// Gets application state
#[cfg_attr(test, automock)]
pub trait StateGetter {
    fn get_state(&self) -> Rc<State>;
}

/// Dispatches actions to update application state
#[cfg_attr(test, automock)]
pub trait Dispatcher {
    fn dispatch(&self, action: Action);
}

/// Handles mutating store state based on provided action
#[cfg_attr(test, automock)]
pub trait Reducer {
    fn reduce(&self, state: &mut State, action: Action) -> Effect;
}

/// Executes side effects requested by the reducer
#[cfg_attr(test, automock)]
pub trait EffectHandler {
    fn handle(&self, effect: Effect);
}

/// Centralized state container
pub struct Store {
    state: RefCell<Rc<State>>,
    reducer: Box<dyn Reducer>,
    effects: Box<dyn EffectHandler>,
}

impl Store {
    /// Creates a new store from an initial state, the reducer applied to
    /// every action and the handler executing resulting effects.
    pub fn new(
        initial_state: State,
        reducer: Box<dyn Reducer>,
        effects: Box<dyn EffectHandler>,
    ) -> Self {
        Self {
            state: RefCell::new(Rc::new(initial_state)),
            reducer,
            effects,
        }
    }
}

impl StateGetter for Store {
    fn get_state(&self) -> Rc<State> {
        self.state.borrow().clone()
    }
}

impl Dispatcher for Store {
    fn dispatch(&self, action: Action) {
        let effect = {
            let mut rc = self.state.borrow_mut();
            let state = Rc::make_mut(&mut rc);
            self.reducer.reduce(state, action)
        };

        if effect != Effect::None {
            self.effects.handle(effect);
        }
    }
}

#[cfg(test)]
#[path = "./store_tests.rs"]
mod tests;

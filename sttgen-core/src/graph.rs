//! The resolved state graph.
//!
//! States are stored flat and refer to each other through [`StateId`]
//! handles, so defaults and super-states may point anywhere (including at
//! the owning state) without ownership cycles.

use std::collections::HashMap;
use std::fmt;

/// Stable handle of a state inside its [`StateGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(pub(crate) usize);

impl StateId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One row's subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    pub name: String,
    pub default_target: StateId,
    pub super_target: Option<StateId>,
    pub is_super: bool,
    /// Event name to target, in declaration order.
    pub events: Vec<(String, StateId)>,
}

impl State {
    pub(crate) fn new(id: StateId, name: String) -> Self {
        Self {
            name,
            default_target: id,
            super_target: None,
            is_super: false,
            events: Vec::new(),
        }
    }

    /// Adds an event, replacing the target of an existing event with the
    /// same name in place.
    pub(crate) fn add_event(&mut self, name: String, target: StateId) {
        match self.events.iter_mut().find(|(event, _)| *event == name) {
            Some(slot) => slot.1 = target,
            None => self.events.push((name, target)),
        }
    }
}

/// All states of one table, in row order.
#[derive(Debug, Clone, Default)]
pub struct StateGraph {
    states: Vec<State>,
    index: HashMap<String, StateId>,
}

impl StateGraph {
    /// Registers a fresh state, or returns `None` if the name is taken.
    pub(crate) fn register(&mut self, name: &str) -> Option<StateId> {
        if self.index.contains_key(name) {
            return None;
        }
        let id = StateId(self.states.len());
        self.states.push(State::new(id, name.to_string()));
        self.index.insert(name.to_string(), id);
        Some(id)
    }

    pub(crate) fn state_mut(&mut self, id: StateId) -> &mut State {
        &mut self.states[id.0]
    }

    pub fn lookup(&self, name: &str) -> Option<StateId> {
        self.index.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn state(&self, id: StateId) -> &State {
        &self.states[id.0]
    }

    pub fn name(&self, id: StateId) -> &str {
        &self.states[id.0].name
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// States in row order.
    pub fn states(&self) -> impl Iterator<Item = (StateId, &State)> {
        self.states
            .iter()
            .enumerate()
            .map(|(index, state)| (StateId(index), state))
    }

    /// The first row's state, which the generated getter starts in.
    pub fn initial(&self) -> Option<StateId> {
        (!self.states.is_empty()).then_some(StateId(0))
    }

    /// Non-super states in row order. These own the dispatcher slots.
    pub fn dispatched(&self) -> impl Iterator<Item = (StateId, &State)> {
        self.states().filter(|(_, state)| !state.is_super)
    }

    /// Enumeration order: non-super states, then super states, each in row
    /// order.
    pub fn enumeration_order(&self) -> Vec<StateId> {
        let (mut order, supers): (Vec<_>, Vec<_>) = self
            .states()
            .map(|(id, state)| (id, state.is_super))
            .partition(|(_, is_super)| !is_super);
        order.extend(supers);
        order.into_iter().map(|(id, _)| id).collect()
    }

    /// The transitions a state can report: its default target followed by
    /// every other distinct event target, in declaration order.
    pub fn outcomes(&self, id: StateId) -> Vec<StateId> {
        let state = self.state(id);
        let mut outcomes = vec![state.default_target];
        for &(_, target) in &state.events {
            if !outcomes.contains(&target) {
                outcomes.push(target);
            }
        }
        outcomes
    }

    /// Every event name used by any state, once, in first-use order.
    pub fn event_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for (_, state) in self.states() {
            for (event, _) in &state.events {
                if !names.contains(&event.as_str()) {
                    names.push(event);
                }
            }
        }
        names
    }

    /// One-line summary of a state for progress output.
    pub fn summary(&self, id: StateId) -> StateSummary<'_> {
        StateSummary { graph: self, id }
    }
}

/// `Display` adapter produced by [`StateGraph::summary`].
pub struct StateSummary<'a> {
    graph: &'a StateGraph,
    id: StateId,
}

impl fmt::Display for StateSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.graph.state(self.id);
        if state.is_super {
            f.write_str("Super ")?;
        }
        write!(
            f,
            "State: {}, Default: {}, Substate Of: {}, Events: {{",
            state.name,
            self.graph.name(state.default_target),
            state
                .super_target
                .map_or("None", |id| self.graph.name(id)),
        )?;
        for (i, (event, target)) in state.events.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{event}: {}", self.graph.name(*target))?;
        }
        f.write_str("}")
    }
}

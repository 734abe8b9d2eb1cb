//! Advisory checks over a validated graph.
//!
//! None of these findings fail a table. They point at tables that build
//! fine but whose generated scaffold would misbehave.

use std::fmt;

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::Dfs;

use crate::graph::{StateGraph, StateId};
use crate::naming;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    /// A dispatched state no transition path from the initial state reaches.
    Unreachable { state: String },
    /// States whose super-state chain loops back on itself.
    SuperCycle { states: Vec<String> },
    /// `state` nests under `super_state`, which is not flagged with `\s`.
    UndeclaredSuper { state: String, super_state: String },
    /// `state` transitions into `target`, a super state without a
    /// dispatcher slot.
    TransitionIntoSuper { state: String, target: String },
    /// The first row, where the machine starts, is a super state.
    InitialIsSuper { state: String },
    /// Distinct state or event names that format to the same generated
    /// identifier, which would be declared twice.
    IdentifierCollision { identifier: String, names: Vec<String> },
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreachable { state } => {
                write!(f, "state `{state}` is unreachable from the initial state")
            }
            Self::SuperCycle { states } => {
                write!(f, "super state chain forms a cycle: {}", states.join(" -> "))
            }
            Self::UndeclaredSuper { state, super_state } => write!(
                f,
                "state `{state}` nests under `{super_state}`, which is not marked as a super state"
            ),
            Self::TransitionIntoSuper { state, target } => write!(
                f,
                "state `{state}` transitions into super state `{target}`, which has no dispatcher slot"
            ),
            Self::InitialIsSuper { state } => write!(
                f,
                "initial state `{state}` is a super state and has no dispatcher slot"
            ),
            Self::IdentifierCollision { identifier, names } => write!(
                f,
                "`{}` all generate the identifier `{identifier}`",
                names.join("`, `")
            ),
        }
    }
}

/// Runs every check and returns the findings in a stable order.
pub fn analyze(graph: &StateGraph) -> Vec<Finding> {
    let mut findings = Vec::new();
    if let Some(initial) = graph.initial().filter(|id| graph.state(*id).is_super) {
        findings.push(Finding::InitialIsSuper {
            state: graph.name(initial).to_string(),
        });
    }
    findings.extend(identifier_collisions(graph));
    findings.extend(transitions_into_supers(graph));
    findings.extend(undeclared_supers(graph));
    findings.extend(super_cycles(graph));
    findings.extend(unreachable(graph));
    findings
}

fn node(id: StateId) -> NodeIndex {
    NodeIndex::new(id.index())
}

fn transition_graph(graph: &StateGraph) -> DiGraph<StateId, ()> {
    let mut transitions = DiGraph::with_capacity(graph.len(), graph.len());
    for (id, _) in graph.states() {
        transitions.add_node(id);
    }
    for (id, state) in graph.states() {
        transitions.add_edge(node(id), node(state.default_target), ());
        for &(_, target) in &state.events {
            transitions.add_edge(node(id), node(target), ());
        }
    }
    transitions
}

fn unreachable(graph: &StateGraph) -> Vec<Finding> {
    let Some(initial) = graph.initial() else {
        return Vec::new();
    };
    let transitions = transition_graph(graph);
    let mut reached = vec![false; graph.len()];
    let mut dfs = Dfs::new(&transitions, node(initial));
    while let Some(next) = dfs.next(&transitions) {
        reached[next.index()] = true;
    }
    graph
        .dispatched()
        .filter(|(id, _)| !reached[id.index()])
        .map(|(_, state)| Finding::Unreachable {
            state: state.name.clone(),
        })
        .collect()
}

fn super_cycles(graph: &StateGraph) -> Vec<Finding> {
    let mut supers: DiGraph<StateId, ()> = DiGraph::with_capacity(graph.len(), graph.len());
    for (id, _) in graph.states() {
        supers.add_node(id);
    }
    for (id, state) in graph.states() {
        if let Some(parent) = state.super_target {
            supers.add_edge(node(id), node(parent), ());
        }
    }

    let mut cycles: Vec<Vec<StateId>> = tarjan_scc(&supers)
        .into_iter()
        .filter(|component| {
            component.len() > 1 || supers.contains_edge(component[0], component[0])
        })
        .map(|component| {
            let mut ids: Vec<StateId> = component.iter().map(|n| supers[*n]).collect();
            ids.sort();
            ids
        })
        .collect();
    cycles.sort();

    cycles
        .into_iter()
        .map(|ids| Finding::SuperCycle {
            states: ids.iter().map(|id| graph.name(*id).to_string()).collect(),
        })
        .collect()
}

fn undeclared_supers(graph: &StateGraph) -> Vec<Finding> {
    graph
        .states()
        .filter_map(|(_, state)| {
            let parent = state.super_target?;
            (!graph.state(parent).is_super).then(|| Finding::UndeclaredSuper {
                state: state.name.clone(),
                super_state: graph.name(parent).to_string(),
            })
        })
        .collect()
}

/// State constants, state actions and event predicates share one C scope.
fn identifier_collisions(graph: &StateGraph) -> Vec<Finding> {
    let mut claims: Vec<(String, Vec<String>)> = Vec::new();
    for (_, state) in graph.states() {
        claim(&mut claims, naming::constant(&state.name), &state.name);
        claim(&mut claims, naming::action(&state.name), &state.name);
    }
    for event in graph.event_names() {
        claim(&mut claims, naming::function(event), event);
    }

    claims
        .into_iter()
        .filter(|(_, names)| names.len() > 1)
        .map(|(identifier, names)| Finding::IdentifierCollision { identifier, names })
        .collect()
}

fn claim(claims: &mut Vec<(String, Vec<String>)>, identifier: String, name: &str) {
    match claims.iter_mut().find(|(claimed, _)| *claimed == identifier) {
        Some((_, names)) => {
            if !names.iter().any(|owner| owner == name) {
                names.push(name.to_string());
            }
        }
        None => claims.push((identifier, vec![name.to_string()])),
    }
}

fn transitions_into_supers(graph: &StateGraph) -> Vec<Finding> {
    let mut findings = Vec::new();
    for (id, state) in graph.dispatched() {
        for target in graph.outcomes(id) {
            if graph.state(target).is_super {
                findings.push(Finding::TransitionIntoSuper {
                    state: state.name.clone(),
                    target: graph.name(target).to_string(),
                });
            }
        }
    }
    findings
}

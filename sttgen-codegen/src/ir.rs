use sttgen_core::{StateGraph, StateId, naming};

use crate::helpers;

/// Complete intermediate representation of one table.
/// Every identifier a backend prints is decided here, so both backends
/// agree on names and ordering by construction.
#[derive(Debug, Clone)]
pub struct MachineIr {
    /// Naming root, after reserved-name substitution.
    pub project: String,
    /// Function-style project name, used as the C++ namespace.
    pub namespace: String,
    pub getter: String,
    pub include_guard: String,
    pub initial: String,

    /// Enumerants in enumeration order: non-super first, then super.
    pub enumerants: Vec<String>,
    /// Dispatcher slots, one per non-super state in row order.
    pub slots: Vec<SlotIr>,
    /// States in row order.
    pub states: Vec<StateIr>,
    pub events: Vec<EventIr>,
}

#[derive(Debug, Clone)]
pub struct SlotIr {
    pub constant: String,
    pub action: String,
}

#[derive(Debug, Clone)]
pub struct StateIr {
    pub constant: String,
    pub phrase: String,
    pub action: String,
    pub default: String,
    /// Default target first, then every other distinct event target.
    pub outcomes: Vec<String>,
    pub guards: Vec<GuardIr>,
    pub super_state: Option<SuperIr>,
}

#[derive(Debug, Clone)]
pub struct GuardIr {
    pub predicate: String,
    pub phrase: String,
    pub target: String,
}

#[derive(Debug, Clone)]
pub struct SuperIr {
    pub constant: String,
    pub action: String,
}

#[derive(Debug, Clone)]
pub struct EventIr {
    pub predicate: String,
    pub phrase: String,
}

impl MachineIr {
    /// Lowers a validated graph. `stem` is the table's file stem.
    pub fn new(graph: &StateGraph, stem: &str) -> Self {
        let project = helpers::project_name(stem).to_string();
        let constant = |id: StateId| helpers::state_constant(graph.name(id));

        let enumerants = graph.enumeration_order().into_iter().map(constant).collect();

        let slots = graph
            .dispatched()
            .map(|(_, state)| SlotIr {
                constant: helpers::state_constant(&state.name),
                action: helpers::action_ident(&state.name),
            })
            .collect();

        let states = graph
            .states()
            .map(|(id, state)| StateIr {
                constant: helpers::state_constant(&state.name),
                phrase: naming::phrase(&state.name),
                action: helpers::action_ident(&state.name),
                default: constant(state.default_target),
                outcomes: graph.outcomes(id).into_iter().map(constant).collect(),
                guards: state
                    .events
                    .iter()
                    .map(|(event, target)| GuardIr {
                        predicate: helpers::predicate_ident(event),
                        phrase: naming::phrase(event),
                        target: constant(*target),
                    })
                    .collect(),
                super_state: state.super_target.map(|parent| SuperIr {
                    constant: constant(parent),
                    action: helpers::action_ident(graph.name(parent)),
                }),
            })
            .collect();

        let events = graph
            .event_names()
            .into_iter()
            .map(|event| EventIr {
                predicate: helpers::predicate_ident(event),
                phrase: naming::phrase(event),
            })
            .collect();

        let initial = graph.initial().map(constant).unwrap_or_default();

        Self {
            namespace: naming::function(&project),
            getter: helpers::getter_ident(&project),
            include_guard: helpers::include_guard(&project),
            project,
            initial,
            enumerants,
            slots,
            states,
            events,
        }
    }
}

use sttgen_core::naming;

/// Base name of the runtime module pair every backend emits.
pub const RUNTIME_MODULE: &str = "state_machine";

/// Project name used when a table would collide with [`RUNTIME_MODULE`].
pub const FALLBACK_PROJECT: &str = "my_state_machine";

/// Resolves the naming root for a table file stem.
pub fn project_name(stem: &str) -> &str {
    if stem == RUNTIME_MODULE {
        FALLBACK_PROJECT
    } else {
        stem
    }
}

/// Generates the enumerant for a state: `[STATE_NAME]`
pub fn state_constant(state: &str) -> String {
    naming::constant(state)
}

/// Generates the action function for a state: `[StateName]StateAction`
pub fn action_ident(state: &str) -> String {
    naming::action(state)
}

/// Generates the guard predicate for an event: `[EventName]`
pub fn predicate_ident(event: &str) -> String {
    naming::function(event)
}

/// Generates the machine getter: `Get[ProjectName]`
pub fn getter_ident(project: &str) -> String {
    format!("Get{}", naming::function(project))
}

/// Generates the include guard: `__[PROJECT_NAME]_H__`
pub fn include_guard(module: &str) -> String {
    format!("__{}H__", naming::format(module, naming::Style::Constant))
}

use crate::backend::{Backend, TypeStyle};
use crate::helpers::{self, RUNTIME_MODULE};
use crate::ir::MachineIr;
use crate::meta::BuildMetadata;
use crate::writer::CodeWriter;

use super::{Artifact, RUNTIME_DESCRIPTION, close_scope, open_scope, write_stamp};

pub fn render_header(ir: &MachineIr, backend: &Backend, meta: &dyn BuildMetadata) -> Artifact {
    let file_name = backend.runtime_header();
    let guard = helpers::include_guard(RUNTIME_MODULE);
    let mut w = CodeWriter::new();

    write_stamp(&mut w, &file_name, RUNTIME_DESCRIPTION, meta);
    w.line(format!("#ifndef {guard}"))
        .line(format!("#define {guard}"))
        .blank();
    for include in backend.system_includes {
        w.line(format!("#include <{include}>"));
    }
    w.blank()
        .line("// Dispatcher slots, one per non-super state")
        .line(format!("#define\tNUM_STT_STATES\t{}", ir.slots.len()))
        .blank()
        .blank();

    open_scope(
        &mut w,
        backend,
        Backend::RUNTIME_NAMESPACE,
        &[
            "\\brief Types and functions that run a table driven state machine.",
            "",
            "Call ExecuteAction() from the main loop with the machine populated by the",
            "generated getter. Sub-states call ProcessSuperState() right before returning.",
        ],
    );

    w.doc([
        "\\brief Type definition for possible states",
        "",
        "Every state of the table is one value of this type.",
    ])
    .line("typedef uint8_t STT_STATE;")
    .blank();

    w.doc([
        "\\brief Type definition for state action function pointer",
        "",
        "Performs the actions of one state and returns the state to transition to.",
    ])
    .line("typedef STT_STATE (*STT_ACTION)(void);")
    .blank();

    w.doc([
        "\\brief State machine: the current state and one action per dispatched state.",
    ]);
    match backend.type_style {
        TypeStyle::Typedef => w.open("typedef struct STT_MACHINE"),
        TypeStyle::Scoped => w.open("struct STT_MACHINE"),
    };
    w.line("STT_STATE current_state;\t\t\t\t\t\t//!< current state of machine")
        .line("STT_ACTION state_actions[NUM_STT_STATES];\t\t//!< array of state action function pointers");
    match backend.type_style {
        TypeStyle::Typedef => w.close("} STT_MACHINE;"),
        TypeStyle::Scoped => w.close("};"),
    };
    w.blank();

    w.doc([
        "\\brief Runs the action of the current state and stores the state it returns.",
        "",
        "\\param state_table pointer to state table struct",
    ])
    .line("void ExecuteAction(STT_MACHINE * state_table);")
    .blank();

    w.doc([
        "\\brief Lets a super state override the transition chosen by a sub-state.",
        "",
        "Runs super_function and, if it returns anything other than super_state, stores",
        "that value in current_state. Otherwise the sub-state's choice is kept.",
        "",
        "\\param current_state pointer to the sub-state's transitional state",
        "\\param super_state value of the super state the sub-state belongs to",
        "\\param super_function address of the super state action function",
    ])
    .line("void ProcessSuperState(STT_STATE * current_state, STT_STATE super_state, STT_ACTION super_function);");

    close_scope(&mut w, backend);
    w.line(format!("#endif //{guard}"));

    Artifact {
        file_name,
        contents: w.finish(),
    }
}

pub fn render_source(backend: &Backend, meta: &dyn BuildMetadata) -> Artifact {
    let file_name = backend.runtime_source();
    let machine = backend.runtime_item("STT_MACHINE");
    let state = backend.runtime_item("STT_STATE");
    let action = backend.runtime_item("STT_ACTION");
    let mut w = CodeWriter::new();

    write_stamp(&mut w, &file_name, RUNTIME_DESCRIPTION, meta);
    w.line(format!("#include \"{}\"", backend.runtime_header()))
        .blank();

    w.open(format!(
        "void {}({machine} * state_table)",
        backend.runtime_item("ExecuteAction")
    ))
    .line("state_table->current_state = state_table->state_actions[state_table->current_state]();")
    .close("}")
    .blank();

    w.open(format!(
        "void {}({state} * current_state, {state} super_state, {action} super_function)",
        backend.runtime_item("ProcessSuperState")
    ))
    .line("STT_STATE temp_state = super_function();")
    .line("if(temp_state != super_state)")
    .indent()
    .line("*current_state = temp_state;")
    .dedent()
    .close("}");

    Artifact {
        file_name,
        contents: w.finish(),
    }
}

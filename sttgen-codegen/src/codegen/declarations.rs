use crate::backend::{Backend, Scope, TypeStyle};
use crate::ir::{MachineIr, StateIr};
use crate::meta::BuildMetadata;
use crate::writer::CodeWriter;

use super::{Artifact, TABLE_DESCRIPTION, close_scope, join_outcomes, open_scope, write_stamp};

pub fn render(ir: &MachineIr, backend: &Backend, meta: &dyn BuildMetadata) -> Artifact {
    let file_name = backend.header_file(&ir.project);
    let guard = &ir.include_guard;
    let mut w = CodeWriter::new();

    write_stamp(&mut w, &file_name, TABLE_DESCRIPTION, meta);
    w.line(format!("#ifndef {guard}"))
        .line(format!("#define {guard}"))
        .blank()
        .line(format!("#include \"{}\"", backend.runtime_header()))
        .blank();

    // Extern "C" guards wrap the user sections, a namespace only the
    // generated declarations.
    if backend.scope == Scope::ExternC {
        open_scope(&mut w, backend, &ir.namespace, &[]);
        write_user_sections(&mut w);
    } else {
        write_user_sections(&mut w);
        open_scope(
            &mut w,
            backend,
            &ir.namespace,
            &[
                "\\brief States, actions and events of this state machine.",
                "",
                "Contains the STT_STATE enum, the getter, one action per state and one",
                "predicate per event.",
            ],
        );
    }

    write_state_enum(&mut w, ir, backend);

    w.doc([
        "\\brief Populates a state machine struct with the initial state and all actions.",
        "",
        "\\param state_machine pointer to the state machine to populate",
    ])
    .line(format!(
        "void {}({} * state_machine);",
        ir.getter,
        backend.runtime_item("STT_MACHINE")
    ));

    let state_type = backend.runtime_item("STT_STATE");
    for state in &ir.states {
        write_action_doc(&mut w, state);
        w.line(format!("{state_type} {}(void);", state.action));
    }

    w.blank()
        .line("//common action functions and events----------------")
        .blank()
        .comment(["Add prototypes for common actions here, and edit the event predicates below."])
        .blank();

    for event in &ir.events {
        w.doc([
            format!("\\brief Your {} event description", event.phrase),
            String::new(),
            format!("Your extended {} event description", event.phrase),
            String::new(),
            "\\return true if [event true description], false otherwise".to_string(),
        ])
        .line(format!("bool {}(void);", event.predicate));
    }

    close_scope(&mut w, backend);
    w.line(format!("#endif //{guard}"));

    Artifact {
        file_name,
        contents: w.finish(),
    }
}

fn write_user_sections(w: &mut CodeWriter) {
    w.line("//Add your includes---------------------")
        .blank()
        .blank()
        .line("//Add your macros-----------------------")
        .blank()
        .blank();
}

fn write_state_enum(w: &mut CodeWriter, ir: &MachineIr, backend: &Backend) {
    w.doc([
        "\\brief Defined enum of STT_STATEs",
        "",
        "Dispatched states first, super states last.",
    ]);
    match backend.type_style {
        TypeStyle::Typedef => w.open("typedef enum STT_STATE_T"),
        TypeStyle::Scoped => w.open("enum STT_STATE : uint8_t"),
    };
    let last = ir.enumerants.len().saturating_sub(1);
    for (i, constant) in ir.enumerants.iter().enumerate() {
        if i < last {
            w.line(format!("{constant},"));
        } else {
            w.line(constant);
        }
    }
    match backend.type_style {
        TypeStyle::Typedef => w.close("} STT_STATE_T;"),
        TypeStyle::Scoped => w.close("};"),
    };
}

fn write_action_doc(w: &mut CodeWriter, state: &StateIr) {
    let mut returns = join_outcomes(&state.outcomes);
    if state.super_state.is_some() {
        returns.push_str(", unless super state transitions out of sub-state");
    }
    w.doc([
        format!("\\brief {} State action function ({})", state.phrase, state.constant),
        String::new(),
        format!("Your description for {} State action function", state.phrase),
        String::new(),
        format!("\\return state to transition to ({returns})"),
    ]);
}

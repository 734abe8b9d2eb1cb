use crate::backend::Backend;
use crate::ir::{MachineIr, StateIr};
use crate::meta::BuildMetadata;
use crate::writer::CodeWriter;

use super::{Artifact, TABLE_DESCRIPTION, write_stamp};

/// Name of the transitional local in sub-state actions.
const TRANSITIONAL: &str = "current_state";

pub fn render(ir: &MachineIr, backend: &Backend, meta: &dyn BuildMetadata) -> Artifact {
    let file_name = backend.source_file(&ir.project);
    let mut w = CodeWriter::new();

    write_stamp(&mut w, &file_name, TABLE_DESCRIPTION, meta);
    w.line(format!("#include \"{}\"", backend.header_file(&ir.project)))
        .blank()
        .line("//Add your public vars----------------")
        .blank()
        .blank();

    w.line("//state machine struct getter")
        .open(format!(
            "void {}({} * state_machine)",
            backend.table_item(&ir.namespace, &ir.getter),
            backend.runtime_item("STT_MACHINE")
        ))
        .line(format!(
            "state_machine->current_state = {};",
            backend.state_ref(&ir.initial)
        ));
    for slot in &ir.slots {
        w.line(format!(
            "state_machine->state_actions[{}] = &{};",
            backend.state_ref(&slot.constant),
            slot.action
        ));
    }
    w.close("}").blank();

    w.line("//state action functions");
    for state in &ir.states {
        write_action(&mut w, ir, backend, state);
        w.blank();
    }

    w.line("//common event functions")
        .blank()
        .comment(["Implement the event predicates below; add or remove them as needed."])
        .blank();
    for event in &ir.events {
        w.open(format!(
            "bool {}(void)",
            backend.table_item(&ir.namespace, &event.predicate)
        ))
        .comment([format!("Implement {} Event", event.phrase)])
        .line("return true;")
        .close("}")
        .blank();
    }

    w.line("//common action functions")
        .blank()
        .comment(["Implement common action functions here."])
        .blank();

    Artifact {
        file_name,
        contents: w.finish(),
    }
}

/// Emits one state action.
///
/// Without a super state every guard returns its target and the default is
/// returned last. With one, guards assign a transitional local that the
/// super state may override before it is returned.
fn write_action(w: &mut CodeWriter, ir: &MachineIr, backend: &Backend, state: &StateIr) {
    let state_type = backend.runtime_item("STT_STATE");
    w.open(format!(
        "{state_type} {}(void)",
        backend.table_item(&ir.namespace, &state.action)
    ));

    let transition = if state.super_state.is_some() {
        w.line(format!(
            "{state_type} {TRANSITIONAL} = {};",
            backend.state_ref(&state.default)
        ));
        format!("{TRANSITIONAL} = ")
    } else {
        "return ".to_string()
    };

    w.comment([format!("Implement actions for {} State", state.phrase)]);

    for (i, guard) in state.guards.iter().enumerate() {
        let keyword = if i == 0 { "if" } else { "else if" };
        w.open(format!("{keyword}({}())", guard.predicate))
            .comment([format!("Implement actions for {} Event", guard.phrase)])
            .line(format!("{transition}{};", backend.state_ref(&guard.target)))
            .close("}");
    }

    match &state.super_state {
        Some(parent) => {
            w.line(format!(
                "{}(&{TRANSITIONAL}, {}, &{});",
                backend.runtime_item("ProcessSuperState"),
                backend.state_ref(&parent.constant),
                parent.action
            ))
            .line(format!("return {TRANSITIONAL};"));
        }
        None => {
            w.line(format!("return {};", backend.state_ref(&state.default)));
        }
    }
    w.close("}");
}

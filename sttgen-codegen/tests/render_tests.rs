use sttgen_codegen::{Artifact, Backend, FixedMetadata, MachineIr, render};
use sttgen_core::StateGraph;

fn graph(table: &[&[&str]]) -> StateGraph {
    let rows: Vec<Vec<String>> = table
        .iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect();
    StateGraph::build(&rows).unwrap()
}

fn meta() -> FixedMetadata {
    FixedMetadata::new("tester", "01/02/2024 03:04:05")
}

fn artifact<'a>(artifacts: &'a [Artifact], name: &str) -> &'a str {
    &artifacts
        .iter()
        .find(|a| a.file_name == name)
        .unwrap_or_else(|| panic!("missing artifact {name}"))
        .contents
}

#[test]
fn emits_four_artifacts_per_backend() {
    let g = graph(&[&["idle"]]);
    let c: Vec<_> = render(&g, "blinky", &Backend::C, &meta())
        .into_iter()
        .map(|a| a.file_name)
        .collect();
    assert_eq!(c, ["state_machine.h", "state_machine.c", "blinky.h", "blinky.c"]);

    let cpp: Vec<_> = render(&g, "blinky", &Backend::CPP, &meta())
        .into_iter()
        .map(|a| a.file_name)
        .collect();
    assert_eq!(cpp, ["state_machine.h", "state_machine.cpp", "blinky.h", "blinky.cpp"]);
}

#[test]
fn default_only_table_returns_default_directly() {
    let g = graph(&[&["A", "\\DEFAULT", "B"], &["B", "\\DEFAULT", "B"]]);
    let out = render(&g, "simple", &Backend::C, &meta());

    let header = artifact(&out, "simple.h");
    assert!(header.contains("typedef enum STT_STATE_T\n{\n\tA,\n\tB\n} STT_STATE_T;\n"));

    let runtime = artifact(&out, "state_machine.h");
    assert!(runtime.contains("#define\tNUM_STT_STATES\t2\n"));

    let source = artifact(&out, "simple.c");
    assert!(source.contains(
        "void GetSimple(STT_MACHINE * state_machine)\n{\n\
         \tstate_machine->current_state = A;\n\
         \tstate_machine->state_actions[A] = &AStateAction;\n\
         \tstate_machine->state_actions[B] = &BStateAction;\n}\n"
    ));
    assert!(source.contains(
        "STT_STATE AStateAction(void)\n{\n\
         \t/*\n\t * Implement actions for A State\n\t */\n\
         \treturn B;\n}\n"
    ));
}

#[test]
fn sub_state_defers_to_super_state() {
    let g = graph(&[&["A", "\\s"], &["B", "\\SUPER", "A"]]);
    let out = render(&g, "nested", &Backend::C, &meta());

    let header = artifact(&out, "nested.h");
    assert!(header.contains("typedef enum STT_STATE_T\n{\n\tB,\n\tA\n} STT_STATE_T;\n"));
    assert!(header.contains(
        "\\return state to transition to (B, unless super state transitions out of sub-state)"
    ));
    // A is a state, not an event: no predicate is emitted for it.
    assert!(!header.contains("bool A(void);"));

    let runtime = artifact(&out, "state_machine.h");
    assert!(runtime.contains("#define\tNUM_STT_STATES\t1\n"));

    let source = artifact(&out, "nested.c");
    assert!(source.contains(
        "STT_STATE BStateAction(void)\n{\n\
         \tSTT_STATE current_state = B;\n\
         \t/*\n\t * Implement actions for B State\n\t */\n\
         \tProcessSuperState(&current_state, A, &AStateAction);\n\
         \treturn current_state;\n}\n"
    ));
    assert!(!source.contains("state_actions[A]"));
}

#[test]
fn guards_form_an_else_if_chain() {
    let g = graph(&[
        &["idle", "start", "running", "\\SUPER", "top"],
        &["running", "stop", "idle", "fault", "top"],
        &["top", "\\s", "fault", "idle"],
    ]);
    let out = render(&g, "motor", &Backend::C, &meta());
    let source = artifact(&out, "motor.c");

    assert!(source.contains(
        "\tif(Stop())\n\t{\n\t\t/*\n\t\t * Implement actions for Stop Event\n\t\t */\n\
         \t\treturn IDLE;\n\t}\n\telse if(Fault())\n"
    ));
    assert!(source.contains("\tif(Start())\n\t{\n\t\t/*\n\t\t * Implement actions for Start Event\n\t\t */\n\t\tcurrent_state = RUNNING;\n\t}\n"));

    // one predicate per distinct event
    assert_eq!(source.matches("bool Start(void)").count(), 1);
    assert_eq!(source.matches("bool Stop(void)").count(), 1);
    assert_eq!(source.matches("bool Fault(void)").count(), 1);
    // one action per state, super states included
    for action in ["IdleStateAction", "RunningStateAction", "TopStateAction"] {
        assert_eq!(source.matches(&format!("STT_STATE {action}(void)")).count(), 1);
    }
}

#[test]
fn action_docs_do_not_repeat_the_default() {
    let g = graph(&[
        &["idle", "\\DEFAULT", "busy", "a", "busy", "b", "done", "c", "done"],
        &["busy"],
        &["done"],
    ]);
    let out = render(&g, "docs", &Backend::C, &meta());
    let header = artifact(&out, "docs.h");
    assert!(header.contains("\\return state to transition to (BUSY, or DONE)"));
}

#[test]
fn cpp_backend_scopes_and_qualifies() {
    let g = graph(&[
        &["wait_rx", "rx_done", "process"],
        &["process", "\\DEFAULT", "wait_rx", "\\SUPER", "busy"],
        &["busy", "\\s"],
    ]);
    let out = render(&g, "uart_link", &Backend::CPP, &meta());

    let runtime = artifact(&out, "state_machine.h");
    assert!(runtime.contains("namespace StateMachine\n{\n\t/*!\n"));
    assert!(runtime.contains("\ttypedef uint8_t STT_STATE;\n"));
    assert!(runtime.contains("\tstruct STT_MACHINE\n\t{\n"));
    assert!(!runtime.contains("extern \"C\""));

    let runtime_src = artifact(&out, "state_machine.cpp");
    assert!(runtime_src.contains(
        "void StateMachine::ProcessSuperState(StateMachine::STT_STATE * current_state, \
         StateMachine::STT_STATE super_state, StateMachine::STT_ACTION super_function)"
    ));

    let header = artifact(&out, "uart_link.h");
    assert!(header.contains("#ifndef __UART_LINK_H__"));
    assert!(header.contains("namespace UartLink\n{\n"));
    assert!(header.contains("\tenum STT_STATE : uint8_t\n\t{\n\t\tWAIT_RX,\n\t\tPROCESS,\n\t\tBUSY\n\t};\n"));
    assert!(header.contains("\tvoid GetUartLink(StateMachine::STT_MACHINE * state_machine);"));
    assert!(header.contains("\tStateMachine::STT_STATE WaitRxStateAction(void);"));
    assert!(header.contains("\tbool RxDone(void);"));

    let source = artifact(&out, "uart_link.cpp");
    assert!(source.contains("\tstate_machine->state_actions[STT_STATE::PROCESS] = &ProcessStateAction;"));
    assert!(source.contains(
        "StateMachine::STT_STATE UartLink::ProcessStateAction(void)\n{\n\
         \tStateMachine::STT_STATE current_state = STT_STATE::WAIT_RX;\n"
    ));
    assert!(source.contains(
        "\tStateMachine::ProcessSuperState(&current_state, STT_STATE::BUSY, &BusyStateAction);"
    ));
    assert!(source.contains("bool UartLink::RxDone(void)\n{\n"));
}

#[test]
fn backends_agree_on_the_model() {
    let g = graph(&[
        &["idle", "start", "running", "\\SUPER", "top"],
        &["running", "stop", "idle"],
        &["top", "\\s", "fault", "idle"],
    ]);
    let ir = MachineIr::new(&g, "agree");
    let c = render(&g, "agree", &Backend::C, &meta());
    let cpp = render(&g, "agree", &Backend::CPP, &meta());

    for event in &ir.events {
        let decl = format!("bool {}(void);", event.predicate);
        assert_eq!(artifact(&c, "agree.h").matches(&decl).count(), 1);
        assert_eq!(artifact(&cpp, "agree.h").matches(&decl).count(), 1);
    }
    for state in &ir.states {
        let decl = format!("{}(void);", state.action);
        assert_eq!(artifact(&c, "agree.h").matches(&decl).count(), 1);
        assert_eq!(artifact(&cpp, "agree.h").matches(&decl).count(), 1);
    }
}

#[test]
fn reserved_table_name_is_substituted() {
    let g = graph(&[&["idle"]]);
    let out = render(&g, "state_machine", &Backend::C, &meta());
    assert!(out.iter().any(|a| a.file_name == "my_state_machine.h"));
    assert!(artifact(&out, "my_state_machine.c").contains("void GetMyStateMachine("));
}

#[test]
fn runtime_is_table_independent() {
    let small = render(&graph(&[&["a"]]), "one", &Backend::C, &meta());
    let large = render(
        &graph(&[&["x", "go", "y"], &["y", "\\SUPER", "x"], &["z"]]),
        "two",
        &Backend::C,
        &meta(),
    );
    assert_eq!(
        artifact(&small, "state_machine.c"),
        artifact(&large, "state_machine.c")
    );
}

#[test]
fn runtime_source_dispatches_and_lets_super_state_override() {
    let g = graph(&[&["a"]]);
    for (backend, prefix) in [(&Backend::C, ""), (&Backend::CPP, "StateMachine::")] {
        let out = render(&g, "one", backend, &meta());
        let source = artifact(&out, &backend.runtime_source());

        assert!(source.contains(&format!(
            "void {prefix}ExecuteAction({prefix}STT_MACHINE * state_table)\n{{\n\
             \tstate_table->current_state = state_table->state_actions[state_table->current_state]();\n}}\n"
        )));
        assert!(source.contains(&format!(
            "void {prefix}ProcessSuperState({prefix}STT_STATE * current_state, \
             {prefix}STT_STATE super_state, {prefix}STT_ACTION super_function)\n{{\n\
             \tSTT_STATE temp_state = super_function();\n\
             \tif(temp_state != super_state)\n\
             \t\t*current_state = temp_state;\n}}\n"
        )));
    }
}

#[test]
fn stamp_uses_injected_metadata() {
    let out = render(&graph(&[&["a"]]), "stamped", &Backend::C, &meta());
    for artifact in &out {
        assert!(artifact.contents.starts_with("/*\n * Name        : "));
        assert!(artifact.contents.contains(" * Author      : tester\n"));
        assert!(artifact.contents.contains(" * Created     : 01/02/2024 03:04:05\n"));
    }
}

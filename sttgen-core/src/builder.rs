//! Two-pass graph builder.

use crate::error::{Relation, TableError};
use crate::graph::{StateGraph, StateId};
use crate::token::{self, Instruction};

impl StateGraph {
    /// Builds and validates the graph for one table.
    ///
    /// The first pass registers every subject so that rows may reference
    /// states declared further down; the second pass tokenizes each row and
    /// resolves its targets.
    pub fn build<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<Self, TableError> {
        let mut graph = StateGraph::default();

        for row in rows {
            if let Some(subject) = row.first() {
                let subject = subject.as_ref();
                if graph.register(subject).is_none() {
                    return Err(TableError::DuplicateStateName {
                        state: subject.to_string(),
                    });
                }
            }
        }

        if graph.is_empty() {
            return Err(TableError::EmptyTable);
        }

        for row in rows {
            let Some(subject) = row.first().and_then(|s| graph.lookup(s.as_ref())) else {
                continue;
            };
            let instructions = token::tokenize(row, |name| graph.contains(name))?;
            for instruction in instructions {
                graph.apply(subject, instruction)?;
            }
        }

        Ok(graph)
    }

    fn apply(&mut self, subject: StateId, instruction: Instruction) -> Result<(), TableError> {
        match instruction {
            Instruction::MarkSuper => self.state_mut(subject).is_super = true,
            Instruction::Default(target) => {
                let target = self.resolve(subject, Relation::Default, target)?;
                self.state_mut(subject).default_target = target;
            }
            Instruction::Super(target) => {
                let target = self.resolve(subject, Relation::Super, target)?;
                self.state_mut(subject).super_target = Some(target);
            }
            Instruction::Event { name, target } => {
                let target = self.resolve(subject, Relation::Event(name.clone()), target)?;
                self.state_mut(subject).add_event(name, target);
            }
        }
        Ok(())
    }

    fn resolve(
        &self,
        subject: StateId,
        relation: Relation,
        target: String,
    ) -> Result<StateId, TableError> {
        self.lookup(&target)
            .ok_or_else(|| TableError::UnresolvedReference {
                row: self.name(subject).to_string(),
                relation,
                target,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(table: &[&[&str]]) -> Vec<Vec<String>> {
        table
            .iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect()
    }

    #[test]
    fn forward_references_resolve() {
        let graph = StateGraph::build(&rows(&[&["a", "\\DEFAULT", "b"], &["b"]])).unwrap();
        let a = graph.lookup("a").unwrap();
        let b = graph.lookup("b").unwrap();
        assert_eq!(graph.state(a).default_target, b);
        assert_eq!(graph.state(b).default_target, b);
    }

    #[test]
    fn default_target_is_self_when_absent() {
        let graph = StateGraph::build(&rows(&[&["idle"]])).unwrap();
        let idle = graph.lookup("idle").unwrap();
        assert_eq!(graph.state(idle).default_target, idle);
        assert_eq!(graph.state(idle).super_target, None);
        assert!(!graph.state(idle).is_super);
    }

    #[test]
    fn repeated_event_keeps_its_position() {
        let graph = StateGraph::build(&rows(&[
            &["a", "go", "b", "stop", "a", "go", "c"],
            &["b"],
            &["c"],
        ]))
        .unwrap();
        let a = graph.state(graph.lookup("a").unwrap());
        let names: Vec<_> = a.events.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, ["go", "stop"]);
        assert_eq!(a.events[0].1, graph.lookup("c").unwrap());
    }

    #[test]
    fn duplicate_subject_is_rejected() {
        let err = StateGraph::build(&rows(&[&["a"], &["b"], &["a"]])).unwrap_err();
        assert_eq!(err, TableError::DuplicateStateName { state: "a".into() });
    }

    #[test]
    fn unresolved_super_target_is_rejected() {
        let err = StateGraph::build(&rows(&[&["a", "\\SUPER", "top"]])).unwrap_err();
        assert_eq!(
            err,
            TableError::UnresolvedReference {
                row: "a".into(),
                relation: Relation::Super,
                target: "top".into(),
            }
        );
    }

    #[test]
    fn empty_table_is_rejected() {
        let err = StateGraph::build::<String>(&[]).unwrap_err();
        assert_eq!(err, TableError::EmptyTable);
    }
}

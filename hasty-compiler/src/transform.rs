use crate::ast::{Program, Statement};
use crate::ir;

/// Where a visited node sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parent<'a> {
    Program,
    Call(&'a str),
}

/// Per-kind hooks for [`walk`]. Every hook defaults to a no-op, so a
/// visitor only implements the kinds it cares about. Each node gets an
/// `enter` before its children are visited and an `exit` after; for leaves
/// the two run back to back.
pub trait Visitor {
    fn enter_program(&mut self, _program: &Program) {}
    fn exit_program(&mut self, _program: &Program) {}

    fn enter_call(&mut self, _name: &str, _params: &[Statement], _parent: Parent<'_>) {}
    fn exit_call(&mut self, _name: &str, _params: &[Statement], _parent: Parent<'_>) {}

    fn enter_string(&mut self, _value: &str, _parent: Parent<'_>) {}
    fn exit_string(&mut self, _value: &str, _parent: Parent<'_>) {}

    fn enter_number(&mut self, _value: &str, _parent: Parent<'_>) {}
    fn exit_number(&mut self, _value: &str, _parent: Parent<'_>) {}

    fn enter_identifier(&mut self, _name: &str, _parent: Parent<'_>) {}
    fn exit_identifier(&mut self, _name: &str, _parent: Parent<'_>) {}

    fn enter_state(&mut self, _name: &str, _value: &str, _parent: Parent<'_>) {}
    fn exit_state(&mut self, _name: &str, _value: &str, _parent: Parent<'_>) {}
}

/// Depth-first, pre-order traversal of `program`.
pub fn walk<V: Visitor + ?Sized>(program: &Program, visitor: &mut V) {
    visitor.enter_program(program);
    for statement in &program.body {
        walk_statement(statement, Parent::Program, visitor);
    }
    visitor.exit_program(program);
}

fn walk_statement<V: Visitor + ?Sized>(node: &Statement, parent: Parent<'_>, visitor: &mut V) {
    match node {
        Statement::CallExpression { name, params } => {
            visitor.enter_call(name, params, parent);
            for param in params {
                walk_statement(param, Parent::Call(name), visitor);
            }
            visitor.exit_call(name, params, parent);
        }
        Statement::StringLiteral(value) => {
            visitor.enter_string(value, parent);
            visitor.exit_string(value, parent);
        }
        Statement::NumberLiteral(value) => {
            visitor.enter_number(value, parent);
            visitor.exit_number(value, parent);
        }
        Statement::Identifier(name) => {
            visitor.enter_identifier(name, parent);
            visitor.exit_identifier(name, parent);
        }
        Statement::StateDeclaration { name, value } => {
            visitor.enter_state(name, value, parent);
            visitor.exit_state(name, value, parent);
        }
    }
}

/// Restructure the source tree into the emission tree.
pub fn transform(program: &Program) -> ir::Program {
    let mut builder = IrBuilder::default();
    walk(program, &mut builder);
    builder.finish()
}

/// Arena slot. Calls hold the indices of their arguments; the root holds
/// the indices of the program body.
#[derive(Debug)]
enum Slot {
    Root(Vec<usize>),
    Call {
        callee: String,
        top_level: bool,
        arguments: Vec<usize>,
    },
    Leaf(ir::Node),
    Taken,
}

/// Builds the IR in pre-order: every node is appended to the current
/// accumulation target when it is entered, and a call pushes its own slot
/// as the target for its params. Targets are arena indices, so no node is
/// borrowed while its children are being filled in.
#[derive(Debug)]
struct IrBuilder {
    arena: Vec<Slot>,
    targets: Vec<usize>,
}

impl Default for IrBuilder {
    fn default() -> Self {
        Self {
            arena: vec![Slot::Root(Vec::new())],
            targets: vec![0],
        }
    }
}

impl IrBuilder {
    fn append(&mut self, slot: Slot) -> usize {
        let index = self.arena.len();
        self.arena.push(slot);
        let target = *self.targets.last().unwrap_or(&0);
        match &mut self.arena[target] {
            Slot::Root(children) | Slot::Call { arguments: children, .. } => children.push(index),
            Slot::Leaf(_) | Slot::Taken => unreachable!("leaves never become targets"),
        }
        index
    }

    fn finish(mut self) -> ir::Program {
        let body = match std::mem::replace(&mut self.arena[0], Slot::Taken) {
            Slot::Root(children) => children,
            _ => Vec::new(),
        };
        let body = body.into_iter().map(|i| self.take(i)).collect();
        ir::Program { body }
    }

    fn take(&mut self, index: usize) -> ir::Node {
        match std::mem::replace(&mut self.arena[index], Slot::Taken) {
            Slot::Leaf(node) => node,
            Slot::Call {
                callee,
                top_level,
                arguments,
            } => {
                let call = ir::CallExpression {
                    callee: ir::Identifier { name: callee },
                    arguments: arguments.into_iter().map(|i| self.take(i)).collect(),
                };
                if top_level {
                    ir::Node::ExpressionStatement { expression: call }
                } else {
                    ir::Node::CallExpression(call)
                }
            }
            Slot::Root(_) | Slot::Taken => unreachable!("arena slot {index} visited twice"),
        }
    }
}

impl Visitor for IrBuilder {
    fn enter_call(&mut self, name: &str, _params: &[Statement], parent: Parent<'_>) {
        let index = self.append(Slot::Call {
            callee: name.to_string(),
            top_level: !matches!(parent, Parent::Call(_)),
            arguments: Vec::new(),
        });
        self.targets.push(index);
    }

    fn exit_call(&mut self, _name: &str, _params: &[Statement], _parent: Parent<'_>) {
        self.targets.pop();
    }

    fn enter_string(&mut self, value: &str, _parent: Parent<'_>) {
        self.append(Slot::Leaf(ir::Node::StringLiteral(value.to_string())));
    }

    fn enter_number(&mut self, value: &str, _parent: Parent<'_>) {
        self.append(Slot::Leaf(ir::Node::NumberLiteral(value.to_string())));
    }

    fn enter_identifier(&mut self, name: &str, _parent: Parent<'_>) {
        self.append(Slot::Leaf(ir::Node::Identifier(ir::Identifier {
            name: name.to_string(),
        })));
    }

    fn enter_state(&mut self, name: &str, value: &str, _parent: Parent<'_>) {
        self.append(Slot::Leaf(ir::Node::StateDeclaration {
            name: name.to_string(),
            value: value.to_string(),
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Trace(Vec<String>);

    impl Visitor for Trace {
        fn enter_call(&mut self, name: &str, _: &[Statement], _: Parent<'_>) {
            self.0.push(format!("enter {name}"));
        }
        fn exit_call(&mut self, name: &str, _: &[Statement], _: Parent<'_>) {
            self.0.push(format!("exit {name}"));
        }
        fn enter_string(&mut self, value: &str, parent: Parent<'_>) {
            self.0.push(format!("string {value} in {parent:?}"));
        }
        fn exit_string(&mut self, value: &str, _: Parent<'_>) {
            self.0.push(format!("exit string {value}"));
        }
    }

    #[test]
    fn walk_is_preorder_with_exit_after_children() {
        let program = Program {
            body: vec![Statement::CallExpression {
                name: "VStack".into(),
                params: vec![
                    Statement::StringLiteral("a".into()),
                    Statement::CallExpression {
                        name: "Text".into(),
                        params: vec![],
                    },
                ],
            }],
        };
        let mut trace = Trace::default();
        walk(&program, &mut trace);
        assert_eq!(
            trace.0,
            vec![
                "enter VStack",
                "string a in Call(\"VStack\")",
                "exit string a",
                "enter Text",
                "exit Text",
                "exit VStack",
            ]
        );
    }
}

//! Source-level syntax tree, as written in the DSL.

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub body: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `Name(...)` or `Name { ... }`
    CallExpression {
        name: String,
        params: Vec<Statement>,
    },
    StringLiteral(String),
    NumberLiteral(String), // raw digits, never converted
    Identifier(String),
    /// `@State name = value`
    StateDeclaration {
        name: String,
        value: String,
    },
}

impl Program {
    /// Total number of nodes, the program itself included.
    pub fn node_count(&self) -> usize {
        1 + self.body.iter().map(Statement::node_count).sum::<usize>()
    }
}

impl Statement {
    pub fn node_count(&self) -> usize {
        match self {
            Statement::CallExpression { params, .. } => {
                1 + params.iter().map(Statement::node_count).sum::<usize>()
            }
            _ => 1,
        }
    }
}

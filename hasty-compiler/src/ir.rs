//! Emission-oriented tree consumed by the code generator.

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub body: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpression {
    pub callee: Identifier,
    pub arguments: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Wraps a call that sits directly under the program.
    ExpressionStatement { expression: CallExpression },
    CallExpression(CallExpression),
    Identifier(Identifier),
    StringLiteral(String),
    NumberLiteral(String),
    StateDeclaration { name: String, value: String },
}

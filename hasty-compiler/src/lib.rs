pub mod ast;
pub mod codegen;
pub mod error;
pub mod ir;
pub mod lexer;
pub mod parser;
pub mod registry;
pub mod token;
pub mod transform;


pub use codegen::{RenderContext, generate};
pub use error::{CompileError, Stage};
pub use lexer::tokenize;
pub use parser::{MAX_NESTING, parse};
pub use registry::{ComponentRegistry, ComponentSpec};
pub use token::{Token, TokenKind};
pub use transform::{Parent, Visitor, transform, walk};

/// Compile DSL source into a JSX component using the built-in components.
pub fn compile(source: &str) -> Result<String, CompileError> {
    compile_with(source, ComponentRegistry::builtin())
}

/// Compile DSL source against a caller-supplied component registry.
pub fn compile_with(source: &str, registry: &ComponentRegistry) -> Result<String, CompileError> {
    let tokens = tokenize(source)?;
    let ast = parse(&tokens)?;
    let ir = transform(&ast);
    log::debug!(
        "compiled {} tokens into {} top-level nodes",
        tokens.len(),
        ir.body.len()
    );
    generate(&ir, registry)
}

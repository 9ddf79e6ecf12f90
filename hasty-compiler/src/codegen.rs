use crate::error::CompileError;
use crate::ir::{CallExpression, Node, Program};
use crate::registry::ComponentRegistry;

/// Whether a node is being emitted as markup child content. Threaded
/// through generation; never stored on nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderContext {
    pub in_render: bool,
}

impl RenderContext {
    pub fn markup() -> Self {
        Self { in_render: true }
    }
}

const STATE_IMPORT: &str = "import {useState} from 'react'";

/// Emit the JSX component for a transformed program.
pub fn generate(program: &Program, registry: &ComponentRegistry) -> Result<String, CompileError> {
    let (states, rest): (Vec<&Node>, Vec<&Node>) = program
        .body
        .iter()
        .partition(|n| matches!(n, Node::StateDeclaration { .. }));

    let children = rest
        .iter()
        .map(|n| emit_node(n, registry, RenderContext::markup()))
        .collect::<Result<Vec<_>, _>>()?
        .join("\n    ");

    if states.is_empty() {
        return Ok(format!(
            "export default function Component() {{
  return (
    {children}
  )
}}"
        ));
    }

    let bindings = states
        .iter()
        .map(|n| emit_node(n, registry, RenderContext::default()))
        .collect::<Result<Vec<_>, _>>()?
        .join("\n  ");

    Ok(format!(
        "{STATE_IMPORT}
export default function Component() {{
  {bindings}
  return (
    {children}
  )
}}"
    ))
}

pub fn emit_node(
    node: &Node,
    registry: &ComponentRegistry,
    ctx: RenderContext,
) -> Result<String, CompileError> {
    match node {
        Node::ExpressionStatement { expression } => emit_call(expression, registry, ctx),
        Node::CallExpression(call) => emit_call(call, registry, ctx),
        Node::Identifier(ident) if ctx.in_render => Ok(format!("{{{}}}", ident.name)),
        Node::Identifier(ident) => Ok(ident.name.clone()),
        Node::StringLiteral(value) | Node::NumberLiteral(value) => Ok(value.clone()),
        Node::StateDeclaration { name, value } => Ok(emit_state(name, value)),
    }
}

fn emit_call(
    call: &CallExpression,
    registry: &ComponentRegistry,
    ctx: RenderContext,
) -> Result<String, CompileError> {
    let name = &call.callee.name;
    let spec = registry
        .get(name)
        .ok_or_else(|| CompileError::UnknownComponent { name: name.clone() })?;

    let mut out = format!("<{}>", spec.open_tag());
    for arg in &call.arguments {
        out.push_str(&emit_node(arg, registry, ctx)?);
    }
    out.push_str(&format!("</{}>", spec.tag));
    Ok(out)
}

fn emit_state(name: &str, value: &str) -> String {
    format!("const [{name}, {}] = useState({value})", setter_name(name))
}

/// `count` -> `setCount`
pub fn setter_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => format!("set{}{}", first.to_uppercase(), chars.as_str()),
        None => "set".to_string(),
    }
}

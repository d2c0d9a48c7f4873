//! Source-like rendering of AST nodes.
//!
//! Every prefix and infix expression is fully parenthesized, which makes the
//! output a direct picture of how precedence was resolved. Expression
//! rendering recurses per level and runs under `ensure_sufficient_stack`.

use std::fmt;

use super::{
    BlockStatement, Expr, ExprKind, FunctionLiteral, Identifier, InfixOp, PrefixOp, Program, Stmt,
};

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{stmt}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Let { name, value, .. } => write!(f, "let {name} = {value};"),
            Stmt::Return { value, .. } => write!(f, "return {value};"),
            Stmt::Expression(expr) => write!(f, "{expr}"),
        }
    }
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{stmt}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        gos_stack::ensure_sufficient_stack(|| self.write_source(f))
    }
}

impl Expr {
    fn write_source(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExprKind::Ident(name) | ExprKind::Str(name) => f.write_str(name),
            ExprKind::Int(value) => write!(f, "{value}"),
            ExprKind::Bool(value) => write!(f, "{value}"),
            ExprKind::Prefix { op, operand } => write!(f, "({op}{operand})"),
            ExprKind::Infix { op, left, right } => write!(f, "({left} {op} {right})"),
            ExprKind::If {
                condition,
                consequence,
                alternative,
            } => {
                write!(f, "if{condition} {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, "else {alternative}")?;
                }
                Ok(())
            }
            ExprKind::Function(function) => write!(f, "{function}"),
            ExprKind::Call { callee, arguments } => {
                write!(f, "{callee}(")?;
                write_comma_separated(f, arguments)?;
                f.write_str(")")
            }
        }
    }
}

impl FunctionLiteral {
    /// Comma-separated parameter names, as shown inside `fn(...)`.
    pub fn parameter_list(&self) -> String {
        self.parameters
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for FunctionLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fn({}) {}", self.parameter_list(), self.body)
    }
}

impl fmt::Display for PrefixOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

impl fmt::Display for InfixOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

fn write_comma_separated(f: &mut fmt::Formatter<'_>, items: &[Expr]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

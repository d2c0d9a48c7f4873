//! AST node types.
//!
//! The tree is built once by the parser and never mutated. Every node keeps
//! the location of the token that introduced it: the operator for prefix and
//! infix expressions, `(` for calls, the keyword for `let`, `return`, `if`
//! and `fn`, and the first token otherwise. Runtime errors report these
//! locations.
//!
//! Function bodies and parameter lists sit behind `Rc` so that closure values
//! can share them with the tree instead of copying.
//!
//! Dropping an [`Expr`] is iterative, so arbitrarily deep trees can be freed
//! without recursing once per level.

mod display;

use std::mem;
use std::rc::Rc;

use crate::Location;

/// Root node: the statements of one input, in order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Program { statements }
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

/// A statement.
#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    /// `let <name> = <value>;`
    Let {
        name: Identifier,
        value: Expr,
        location: Location,
    },
    /// `return <value>;`
    Return { value: Expr, location: Location },
    /// A bare expression, optionally followed by `;`.
    Expression(Expr),
}

impl Stmt {
    pub fn location(&self) -> &Location {
        match self {
            Stmt::Let { location, .. } | Stmt::Return { location, .. } => location,
            Stmt::Expression(expr) => &expr.location,
        }
    }
}

/// `{ <statements> }`, the body of `if` branches and functions.
#[derive(Clone, Debug, PartialEq)]
pub struct BlockStatement {
    pub statements: Vec<Stmt>,
    pub location: Location,
}

/// A name in binding position (`let` target or function parameter).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Identifier {
    pub name: String,
    pub location: Location,
}

impl Identifier {
    pub fn new(name: impl Into<String>, location: Location) -> Self {
        Identifier {
            name: name.into(),
            location,
        }
    }
}

/// An expression node.
#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub location: Location,
}

impl Expr {
    #[inline]
    pub fn new(kind: ExprKind, location: Location) -> Self {
        Expr { kind, location }
    }
}

impl Drop for Expr {
    fn drop(&mut self) {
        if self.kind.is_leaf() {
            return;
        }
        let mut pending = Vec::new();
        take_children(&mut self.kind, &mut pending);
        while let Some(mut expr) = pending.pop() {
            take_children(&mut expr.kind, &mut pending);
        }
    }
}

/// Move the child expressions of `kind` onto `pending`, leaving a leaf.
fn take_children(kind: &mut ExprKind, pending: &mut Vec<Expr>) {
    match mem::replace(kind, ExprKind::Int(0)) {
        ExprKind::Ident(_) | ExprKind::Int(_) | ExprKind::Bool(_) | ExprKind::Str(_) => {}
        ExprKind::Prefix { operand, .. } => pending.push(*operand),
        ExprKind::Infix { left, right, .. } => {
            pending.push(*left);
            pending.push(*right);
        }
        ExprKind::If {
            condition,
            consequence,
            alternative,
        } => {
            pending.push(*condition);
            take_block(consequence, pending);
            if let Some(alternative) = alternative {
                take_block(alternative, pending);
            }
        }
        // A body still shared with a closure value is freed with the closure.
        ExprKind::Function(function) => {
            if let Ok(body) = Rc::try_unwrap(function.body) {
                take_block(body, pending);
            }
        }
        ExprKind::Call { callee, arguments } => {
            pending.push(*callee);
            pending.extend(arguments);
        }
    }
}

fn take_block(block: BlockStatement, pending: &mut Vec<Expr>) {
    pending.extend(block.statements.into_iter().map(|stmt| match stmt {
        Stmt::Let { value, .. } | Stmt::Return { value, .. } | Stmt::Expression(value) => value,
    }));
}

/// Expression variants.
#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    Ident(String),
    Int(i64),
    Bool(bool),
    Str(String),
    Prefix {
        op: PrefixOp,
        operand: Box<Expr>,
    },
    Infix {
        op: InfixOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    If {
        condition: Box<Expr>,
        consequence: BlockStatement,
        alternative: Option<BlockStatement>,
    },
    Function(FunctionLiteral),
    Call {
        callee: Box<Expr>,
        arguments: Vec<Expr>,
    },
}

impl ExprKind {
    fn is_leaf(&self) -> bool {
        matches!(
            self,
            ExprKind::Ident(_) | ExprKind::Int(_) | ExprKind::Bool(_) | ExprKind::Str(_)
        )
    }
}

/// `fn(<parameters>) <body>`
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionLiteral {
    pub parameters: Rc<[Identifier]>,
    pub body: Rc<BlockStatement>,
}

/// Unary operators.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PrefixOp {
    /// `!`
    Not,
    /// `-`
    Neg,
}

impl PrefixOp {
    pub fn as_symbol(self) -> &'static str {
        match self {
            PrefixOp::Not => "!",
            PrefixOp::Neg => "-",
        }
    }
}

/// Binary operators.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InfixOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Lt,
    Gt,
    Eq,
    NotEq,
}

impl InfixOp {
    pub fn as_symbol(self) -> &'static str {
        match self {
            InfixOp::Add => "+",
            InfixOp::Sub => "-",
            InfixOp::Mul => "*",
            InfixOp::Div => "/",
            InfixOp::Mod => "%",
            InfixOp::Lt => "<",
            InfixOp::Gt => ">",
            InfixOp::Eq => "==",
            InfixOp::NotEq => "!=",
        }
    }
}

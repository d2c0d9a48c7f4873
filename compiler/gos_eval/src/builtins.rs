//! Builtin function registry.
//!
//! A fixed table consulted only after identifier lookup has failed in the
//! whole environment chain, so user bindings shadow builtins.

use crate::errors::{unsupported_argument, wrong_builtin_args, EvalErrorKind};
use crate::print_handler::PrintHandlerImpl;
use crate::value::Value;

/// Native function signature. Builtins validate their own arguments; the
/// caller attaches the call-site location to any error.
pub type BuiltinFn = fn(&[Value], &PrintHandlerImpl) -> Result<Value, EvalErrorKind>;

/// A registry entry.
pub struct Builtin {
    pub name: &'static str,
    pub func: BuiltinFn,
}

/// Every builtin, in lookup order.
pub static BUILTINS: [Builtin; 2] = [
    Builtin {
        name: "len",
        func: builtin_len,
    },
    Builtin {
        name: "puts",
        func: builtin_puts,
    },
];

/// Find the builtin called `name`.
pub fn lookup_builtin(name: &str) -> Option<&'static Builtin> {
    BUILTINS.iter().find(|builtin| builtin.name == name)
}

/// `len(s)`: number of characters in a string.
fn builtin_len(args: &[Value], _: &PrintHandlerImpl) -> Result<Value, EvalErrorKind> {
    let [arg] = args else {
        return Err(wrong_builtin_args(args.len(), 1));
    };
    match arg {
        Value::Str(s) => Ok(Value::Int(
            i64::try_from(s.chars().count()).unwrap_or(i64::MAX),
        )),
        other => Err(unsupported_argument("len", other)),
    }
}

/// `puts(args...)`: print each argument on its own line.
fn builtin_puts(args: &[Value], out: &PrintHandlerImpl) -> Result<Value, EvalErrorKind> {
    for arg in args {
        out.println(&arg.to_string());
    }
    Ok(Value::Null)
}

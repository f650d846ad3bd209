use crate::{
    error::DomainError,
    interpreter::function::{builtin, factorial},
};

/// Type alias for builtin function handlers.
///
/// Every builtin takes one argument. Most cannot fail and follow IEEE 754 for
/// out-of-domain input; the ones that refuse their argument return a
/// [`DomainError`].
pub type BuiltinFn = fn(f64) -> Result<f64, DomainError>;

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides a string name and a function pointer implementing the
/// builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => $func:expr
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name: &'static str,
            func: BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, func: $func },
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sqrt"  => builtin::sqrt,
    "sin"   => builtin::sin,
    "cos"   => builtin::cos,
    "tan"   => builtin::tan,
    "sinh"  => builtin::sinh,
    "cosh"  => builtin::cosh,
    "tanh"  => builtin::tanh,
    "log"   => builtin::log,
    "ln"    => builtin::ln,
    "fact"  => factorial::fact,
    "abs"   => builtin::abs,
    "ceil"  => builtin::ceil,
    "floor" => builtin::floor,
}

/// Finds the builtin registered under `name`.
///
/// Lookup is exact and case-sensitive.
///
/// # Example
/// ```
/// use boredcalc::interpreter::function::core::lookup_function;
///
/// let sqrt = lookup_function("sqrt").unwrap();
/// assert_eq!(sqrt(16.0).unwrap(), 4.0);
/// assert!(lookup_function("pow").is_none());
/// assert!(lookup_function("SQRT").is_none());
/// ```
#[must_use]
pub fn lookup_function(name: &str) -> Option<BuiltinFn> {
    BUILTIN_TABLE.iter()
                 .find(|b| b.name == name)
                 .map(|b| b.func)
}

use std::fmt;

use crate::{
    Environment, assign,
    error::CalcResult,
    evaluate,
    interpreter::function::core::BUILTIN_FUNCTIONS,
};

/// Help shown for the `help` command, followed by the function list.
pub const HELP_TEXT: &str = "\
=== Bored Calculator -- Help ===
1. Basic Arithmetic: Use +, -, *, /, and parentheses.
   Example: 3 + 5 * (2 - 1)
2. Variables: Assign values with '=', and use them in calculations.
   Example: x = 5, y = 10, x + y * 2
3. Built-in Constants: PI, E, G (gravitational constant).
4. Functions take the factor right after them: sqrt 16 + 1 is sqrt(16) + 1.
   - Trigonometry (degrees): sin(x), cos(x), tan(x)
   - Hyperbolic: sinh(x), cosh(x), tanh(x)
   - Logarithms: log(x) (base 10), ln(x) (natural log)
   - Factorials: fact(x)
   - Miscellaneous: sqrt(x), abs(x), ceil(x), floor(x)
5. Commands: 'help' for instructions, ':vars' to list variables, 'exit' to quit.";

/// What a session produced for one input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// The line was an expression and evaluated to this value.
    Value(f64),
    /// The line was an assignment.
    Assigned {
        /// The variable that was bound.
        name:  String,
        /// Its new value.
        value: f64,
    },
    /// The `help` command.
    Help,
    /// The `:vars` command, with every binding in name order.
    Bindings(Vec<(String, f64)>),
    /// A blank line.
    Empty,
    /// The `exit` command. The caller should stop reading input.
    Exit,
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => write!(f, "Result > {value:?}"),
            Self::Assigned { name, value } => write!(f, "Assigned - {name} = {value:?}"),
            Self::Help => write!(f, "{HELP_TEXT}\n   Available: {}", BUILTIN_FUNCTIONS.join(", ")),
            Self::Bindings(bindings) => {
                let lines = bindings.iter()
                                    .map(|(name, value)| format!("{name} = {value:?}"))
                                    .collect::<Vec<_>>();
                write!(f, "{}", lines.join("\n"))
            },
            Self::Empty => Ok(()),
            Self::Exit => write!(f, "Exiting..."),
        }
    }
}

/// One calculator session: a set of bindings and the line dispatcher.
///
/// Every line is handled independently; an error only affects the line that
/// caused it and leaves the bindings untouched.
#[derive(Debug, Clone, Default)]
pub struct Session {
    env: Environment,
}

impl Session {
    /// Starts a session with the default constants.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session over an existing environment.
    #[must_use]
    pub const fn with_environment(env: Environment) -> Self {
        Self { env }
    }

    /// The session's bindings.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.env
    }

    /// Handles one input line.
    ///
    /// The line is trimmed, then checked in this order:
    /// 1. `exit`, `help` and `:vars`, case-insensitively
    /// 2. blank line
    /// 3. any line containing `=` is an assignment
    /// 4. everything else is an expression
    ///
    /// # Errors
    /// Returns the error from [`assign`] or [`evaluate`].
    ///
    /// # Example
    /// ```
    /// use boredcalc::{Reply, Session};
    ///
    /// let mut session = Session::new();
    /// assert_eq!(session.run_line("x = 4").unwrap(),
    ///            Reply::Assigned { name:  "x".to_string(),
    ///                              value: 4.0, });
    /// assert_eq!(session.run_line("  x * 2 ").unwrap(), Reply::Value(8.0));
    /// assert_eq!(session.run_line("EXIT").unwrap(), Reply::Exit);
    /// ```
    pub fn run_line(&mut self, line: &str) -> CalcResult<Reply> {
        let input = line.trim();

        if input.eq_ignore_ascii_case("exit") {
            return Ok(Reply::Exit);
        }
        if input.eq_ignore_ascii_case("help") {
            return Ok(Reply::Help);
        }
        if input.eq_ignore_ascii_case(":vars") {
            let bindings = self.env
                               .iter()
                               .map(|(name, value)| (name.to_string(), value))
                               .collect();
            return Ok(Reply::Bindings(bindings));
        }
        if input.is_empty() {
            return Ok(Reply::Empty);
        }

        if input.contains('=') {
            let (name, value) = assign(input, &mut self.env)?;
            return Ok(Reply::Assigned { name, value });
        }

        evaluate(input, &self.env).map(Reply::Value)
    }
}

use std::str::FromStr;

use crate::{error::Error, evaluate, util::num};

/// Text shown on the display after a failed evaluation.
pub const ERROR_INDICATOR: &str = "Error";

/// A keypad action that does more than append a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Empties the expression and the history.
    Clear,
    /// Empties the expression only.
    ClearEntry,
    /// Deletes the last character.
    Backspace,
    /// Adds or removes a leading `-`.
    ToggleSign,
    /// Replaces the expression with its value divided by a hundred.
    Percent,
    /// Appends `/`.
    Divide,
    /// Appends `*`.
    Multiply,
    /// Appends `-`.
    Subtract,
    /// Appends `+`.
    Add,
    /// Evaluates the expression.
    Equals,
}

/// Returned when an action name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAction {
    /// The name that failed to parse.
    pub name: String,
}

impl std::fmt::Display for UnknownAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown action '{}'.", self.name)
    }
}

impl std::error::Error for UnknownAction {}

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "clear" => Self::Clear,
            "clear-entry" => Self::ClearEntry,
            "backspace" => Self::Backspace,
            "toggle-sign" => Self::ToggleSign,
            "percent" => Self::Percent,
            "divide" => Self::Divide,
            "multiply" => Self::Multiply,
            "subtract" => Self::Subtract,
            "add" => Self::Add,
            "equals" => Self::Equals,
            _ => return Err(UnknownAction { name: s.to_string() }),
        })
    }
}

/// Keypad calculator state.
///
/// Owns the expression being typed and the list of finished calculations.
/// The evaluator itself keeps no state; every calculation reads a snapshot of
/// the expression through [`evaluate`].
///
/// ## Usage
///
/// ```
/// use rpncalc::calculator::Calculator;
///
/// let mut calc = Calculator::new();
/// calc.push("2+3*4");
/// assert_eq!(calc.calculate().unwrap(), 14.0);
/// assert_eq!(calc.display(), "14");
/// assert_eq!(calc.history(), ["2+3*4 = 14"]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct Calculator {
    expression: String,
    history:    Vec<String>,
    /// Set by a failed evaluation, cleared by the next edit.
    failed:     bool,
}

impl Calculator {
    /// Creates a calculator with an empty expression and no history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The expression typed so far.
    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Finished calculations, oldest first, as `"<expression> = <result>"`.
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// What the display shows: the error indicator after a failure, `0` for
    /// an empty expression, otherwise the expression.
    #[must_use]
    pub fn display(&self) -> &str {
        if self.failed {
            ERROR_INDICATOR
        } else if self.expression.is_empty() {
            "0"
        } else {
            &self.expression
        }
    }

    /// Appends text to the expression.
    pub fn push(&mut self, text: &str) {
        self.failed = false;
        self.expression.push_str(text);
    }

    /// Empties the expression and the history.
    pub fn clear_all(&mut self) {
        self.failed = false;
        self.expression.clear();
        self.history.clear();
    }

    /// Empties the expression.
    pub fn clear_entry(&mut self) {
        self.failed = false;
        self.expression.clear();
    }

    /// Deletes the last character of the expression, if any.
    pub fn backspace(&mut self) {
        self.failed = false;
        self.expression.pop();
    }

    /// Removes a leading `-`, or prefixes one to a non-empty expression.
    pub fn toggle_sign(&mut self) {
        self.failed = false;
        if let Some(rest) = self.expression.strip_prefix('-') {
            self.expression = rest.to_string();
        } else if !self.expression.is_empty() {
            self.expression.insert(0, '-');
        }
    }

    /// Evaluates the expression and replaces it with a hundredth of the
    /// result. History is not touched.
    ///
    /// # Errors
    /// Any evaluation failure; the expression is left as it was.
    pub fn percent(&mut self) -> Result<f64, Error> {
        let value = num::percent_of(self.evaluate_snapshot()?);
        self.expression = num::format_number(value);
        Ok(value)
    }

    /// Evaluates the expression, records it in the history and replaces the
    /// expression with the result.
    ///
    /// # Errors
    /// Any evaluation failure; the expression is left for the user to fix or
    /// clear, and the display shows [`ERROR_INDICATOR`].
    pub fn calculate(&mut self) -> Result<f64, Error> {
        let value = self.evaluate_snapshot()?;
        let result = num::format_number(value);
        self.history.push(format!("{} = {result}", self.expression));
        self.expression = result;
        Ok(value)
    }

    /// Performs a keypad action. Only [`Action::Percent`] and
    /// [`Action::Equals`] can fail.
    ///
    /// # Errors
    /// See [`Calculator::calculate`].
    pub fn apply(&mut self, action: Action) -> Result<(), Error> {
        match action {
            Action::Clear => self.clear_all(),
            Action::ClearEntry => self.clear_entry(),
            Action::Backspace => self.backspace(),
            Action::ToggleSign => self.toggle_sign(),
            Action::Percent => {
                self.percent()?;
            },
            Action::Divide => self.push("/"),
            Action::Multiply => self.push("*"),
            Action::Subtract => self.push("-"),
            Action::Add => self.push("+"),
            Action::Equals => {
                self.calculate()?;
            },
        }
        Ok(())
    }

    /// Handles a keyboard key by name.
    ///
    /// Digits, `.` and `+-*/%()` are appended. `Enter` and `=` calculate,
    /// `Backspace` deletes, `Escape` clears everything. Returns `false` for
    /// keys that have no meaning to the calculator. A failed calculation
    /// still counts as handled; the display shows the error.
    pub fn handle_key(&mut self, key: &str) -> bool {
        match key {
            "Enter" | "=" => {
                if let Err(e) = self.calculate() {
                    tracing::debug!(key, error = %e, "calculation from keyboard failed");
                }
            },
            "Backspace" => self.backspace(),
            "Escape" => self.clear_all(),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_digit() || ".+-*/%()".contains(c) => {
                        self.push(key);
                    },
                    _ => return false,
                }
            },
        }
        true
    }

    fn evaluate_snapshot(&mut self) -> Result<f64, Error> {
        match evaluate(&self.expression) {
            Ok(value) => {
                self.failed = false;
                Ok(value)
            },
            Err(e) => {
                tracing::warn!(expression = %self.expression, error = %e, "evaluation failed");
                self.failed = true;
                Err(e)
            },
        }
    }
}

//! Arithmetic engine: the single-pending-operation state machine
//!
//! The engine never sees digits. It receives a [`Command`] together with the
//! number currently on the display and decides what, if anything, the display
//! should show next.

use serde::Serialize;

use super::{CalcResult, Command, DivisionPolicy, Operator};

/// Snapshot of the engine's registers
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct EngineState {
    /// Left-hand value of the binary operation in progress
    pub pending_operand: Option<f64>,
    /// Right-hand value captured by the first equals, reused by repeated equals
    pub current_operand: Option<f64>,
    /// Operator awaiting its right-hand value
    pub active_operator: Option<Operator>,
    /// Result of the most recent evaluation
    pub accumulated_result: f64,
    /// Set by equals, cleared by the next operator press
    pub just_evaluated: bool,
}

impl EngineState {
    /// Returns true if no operation is in progress
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.pending_operand.is_none()
            && self.current_operand.is_none()
            && self.active_operator.is_none()
    }
}

/// Pocket-calculator arithmetic with left-to-right evaluation and no precedence
#[derive(Debug, Clone, Default)]
pub struct ArithmeticEngine {
    state: EngineState,
    policy: DivisionPolicy,
}

impl ArithmeticEngine {
    /// Creates an engine with the default division policy
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with an explicit division policy
    #[must_use]
    pub fn with_policy(policy: DivisionPolicy) -> Self {
        Self {
            state: EngineState::default(),
            policy,
        }
    }

    /// Returns the current register snapshot
    #[must_use]
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// Returns the division policy
    #[must_use]
    pub fn policy(&self) -> DivisionPolicy {
        self.policy
    }

    /// Returns every register to its initial value
    pub fn reset(&mut self) {
        self.state = EngineState::default();
    }

    /// Consumes a committing button press
    ///
    /// `shown` is the number currently on the display. Returns the next value
    /// to display, or `None` when the display should stay as it is.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::DivisionByZero`](super::CalcError::DivisionByZero)
    /// under [`DivisionPolicy::Error`]. Registers are left untouched by the
    /// failed evaluation.
    pub fn apply(&mut self, command: Command, shown: f64) -> CalcResult<Option<f64>> {
        let result = match command {
            Command::Clear => {
                self.reset();
                Some(0.0)
            }
            Command::ToggleSign => (shown != 0.0).then(|| -shown),
            Command::Percent => Some(shown * 0.01),
            Command::Equals => self.equals(shown)?,
            Command::Operator(op) => self.operator(op, shown)?,
        };

        tracing::debug!(
            ?command,
            shown,
            ?result,
            state = ?self.state,
            "engine transition"
        );
        Ok(result)
    }

    fn equals(&mut self, shown: f64) -> CalcResult<Option<f64>> {
        self.state.just_evaluated = true;

        let Some(pending) = self.state.pending_operand else {
            return Ok(None);
        };

        // Repeated equals reuses the operand captured by the first press.
        let rhs = self.state.current_operand.unwrap_or(shown);
        let value = self.evaluate(pending, rhs)?;
        self.state.current_operand = Some(rhs);
        self.state.pending_operand = Some(value);
        self.state.accumulated_result = value;
        Ok(Some(value))
    }

    fn operator(&mut self, op: Operator, shown: f64) -> CalcResult<Option<f64>> {
        if self.state.just_evaluated {
            // Start a new chain from the displayed result.
            self.state.pending_operand = None;
            self.state.just_evaluated = false;
        }

        if let Some(pending) = self.state.pending_operand {
            let value = self.evaluate(pending, shown)?;
            self.state.pending_operand = Some(value);
            self.state.accumulated_result = value;
            self.state.active_operator = Some(op);
            self.state.current_operand = None;
            return Ok(Some(value));
        }

        self.state.active_operator = Some(op);
        self.state.current_operand = None;
        self.state.pending_operand = Some(shown);
        Ok(None)
    }

    fn evaluate(&self, lhs: f64, rhs: f64) -> CalcResult<f64> {
        let Some(op) = self.state.active_operator else {
            panic!(
                "engine invariant violated: pending operand {lhs} without an active operator"
            );
        };
        op.evaluate(lhs, rhs, self.policy)
    }
}

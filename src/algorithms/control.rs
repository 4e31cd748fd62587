use serde::{Deserialize, Serialize};

/// A scalar control value consulted by the algorithm each time it is needed.
///
/// Constant parameters never change; linearly decreasing parameters move from
/// `initial` to `final_value` over `max_steps` calls to [`advance`].
///
/// [`advance`]: ControlParameter::advance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ControlParameter {
    Constant(f64),
    LinearDecreasing {
        initial: f64,
        final_value: f64,
        max_steps: usize,
        step: usize,
    },
}

impl ControlParameter {
    pub fn constant(value: f64) -> Self {
        ControlParameter::Constant(value)
    }

    pub fn linear_decreasing(initial: f64, final_value: f64, max_steps: usize) -> Self {
        ControlParameter::LinearDecreasing {
            initial,
            final_value,
            max_steps,
            step: 0,
        }
    }

    /// Current scalar value.
    pub fn value(&self) -> f64 {
        match *self {
            ControlParameter::Constant(value) => value,
            ControlParameter::LinearDecreasing {
                initial,
                final_value,
                max_steps,
                step,
            } => {
                if max_steps == 0 {
                    return final_value;
                }
                let fraction = (step.min(max_steps) as f64) / (max_steps as f64);
                initial + (final_value - initial) * fraction
            }
        }
    }

    /// Overwrite with a constant value.
    pub fn set(&mut self, value: f64) {
        *self = ControlParameter::Constant(value);
    }

    /// Move a varying parameter one step along its schedule.
    pub fn advance(&mut self) {
        if let ControlParameter::LinearDecreasing {
            max_steps, step, ..
        } = self
        {
            if *step < *max_steps {
                *step += 1;
            }
        }
    }
}

impl Default for ControlParameter {
    fn default() -> Self {
        ControlParameter::Constant(0.0)
    }
}

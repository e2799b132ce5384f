//! Boundary with the hosting flow.
//!
//! Inputs arrive once as [`FlowInputs`]; outputs leave as named
//! [`FlowAttributeChange`] updates pushed through a [`FlowNotifier`].

mod channel;
mod inputs;

pub use channel::{FlowAttributeChange, FlowNotifier};
pub use inputs::{FlowInputs, InputError};

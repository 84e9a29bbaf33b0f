// SPDX-License-Identifier: MPL-2.0
//! Presentation core: the view registry, the view selection state machine and
//! the visibility-triggered stat counters.
//!
//! Nothing here depends on the widget tree; the UI feeds observations and
//! frame timestamps in and reads display state back.

pub mod board;
pub mod counter;
pub mod registry;
pub mod selection;
pub mod visibility;

pub use board::{CounterBoard, CounterKey, Placement};
pub use counter::{AnimatedCounter, CounterPhase, TargetValue};
pub use registry::{StatEntry, ViewDescriptor, ViewId};
pub use selection::{LoadTicket, Outcome, Phase, SelectionState, ViewSelection};
pub use visibility::{intersection_ratio, Observation, VisibilityTrigger};

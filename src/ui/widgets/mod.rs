// SPDX-License-Identifier: MPL-2.0
pub mod backdrop;
pub mod loading_spinner;
pub mod visibility_sensor;

pub use backdrop::Backdrop;
pub use loading_spinner::{LoadingClock, LoadingSpinner};
pub use visibility_sensor::{visibility_sensor, VisibilitySensor};

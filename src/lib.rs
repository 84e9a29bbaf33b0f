// SPDX-License-Identifier: MPL-2.0
//! `analytics_hub` is a desktop showcase for embedded data-visualization
//! views, built with the Iced GUI framework.
//!
//! It presents a data story and an analytics dashboard hosted on Tableau
//! Public with view switching, visibility-triggered animated statistics and
//! graceful handling of embeds that cannot load.

#![doc(html_root_url = "https://docs.rs/analytics_hub/0.1.0")]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod embed;
pub mod error;
pub mod i18n;
pub mod showcase;
pub mod ui;

// SPDX-License-Identifier: MPL-2.0
//! Localization via the Fluent system.
//!
//! Translation files are embedded at build time from `assets/i18n/`; the
//! active locale is resolved from the CLI flag, the config file, or the OS
//! locale, in that order, and can be switched at runtime.

pub mod fluent;

//! Console menu of introductory programming lab activities.
//!
//! The crate keeps a strict separation between logic and side effects:
//!
//! - **[`core`]**: Pure, deterministic logic (calculators, factorials, grading,
//!   menu tokens). No I/O, fully testable in isolation.
//! - **[`io`]**: Terminal access, config file loading, screen templates.
//!   The [`io::console::Console`] trait lets tests replace the terminal.
//!
//! [`activities`] implement the individual lab scenarios on top of both, and
//! [`menu`] is the dispatcher loop that ties them together.

pub mod activities;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod menu;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

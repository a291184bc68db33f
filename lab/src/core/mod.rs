//! Deterministic, pure logic behind the lab activities.
//!
//! Core modules must be free of I/O side effects. They operate on plain values
//! and return typed results suitable for tests.

pub mod calculator;
pub mod error;
pub mod factorial;
pub mod menu;
pub mod operand;
pub mod student;

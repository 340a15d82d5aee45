//! Domain logic for the FinSight client.
//!
//! Pure calculations with no UI or I/O, testable in isolation.

pub mod chart_scale;

//! # Radiator HX
//!
//! A thermal-hydraulic performance engine for radiator and tube-bank heat
//! exchangers.
//!
//! Given fluid, geometric, and operating parameters for a hot and a cold
//! stream, the engine computes the standard dimensionless groups (Reynolds,
//! Prandtl, Grashof, Rayleigh, Nusselt), film and overall heat transfer
//! coefficients, NTU and effectiveness for one of six flow configurations,
//! the resulting heat duty, and the Darcy-Weisbach pressure drop of each
//! stream.
//!
//! ## Crate layout
//!
//! - [`engine`]: The calculation pipeline — input and results records, the
//!   error taxonomy, and the [`engine::calculate`] entry point.
//! - [`support`]: Reusable building blocks used by the engine — constrained
//!   numeric types, unit extensions, and the individual formula families.
//!
//! The engine is a pure function: no I/O, no shared state, no logging. One
//! immutable input record in, one immutable results record out, or a single
//! error describing the first violated precondition.

pub mod engine;
pub mod support;

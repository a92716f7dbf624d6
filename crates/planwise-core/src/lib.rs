#![forbid(unsafe_code)]
//! planwise-core library.
//!
//! Typed model of a fixed-scope migration engagement: the object register,
//! the weekly task table, milestones, and the resource allocation curve,
//! plus pure aggregation over those tables and a consistency audit of the
//! plan's authored totals.
//!
//! # Conventions
//!
//! - **Errors**: plan-domain failures are `error::PlanError`; filesystem
//!   surfaces use `anyhow::Result`.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).

pub mod aggregate;
pub mod audit;
pub mod config;
pub mod error;
pub mod model;
pub mod plan;
mod seed;

//! Sinfonia - Music School Management Core
//!
//! This crate implements the student-management core for a community music
//! school: domain entities, lesson-content progress aggregation, and
//! per-student report assembly with pluggable rendering and export.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

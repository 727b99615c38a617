//! Core types shared across sclmx facilities
//!
//! This crate provides the canonical schema constants used by both the
//! logging facility and the error facility:
//!
//! - **Field keys**: component/op/event, durations, record counts and error fields
//! - **Event names**: start/end/end_error

pub mod schema;

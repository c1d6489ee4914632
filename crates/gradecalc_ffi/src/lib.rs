//! FFI bindings for the grade aggregation core.

pub mod api;

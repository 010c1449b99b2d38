//! Utilities for controller request handling.
//!
//! This module provides extractors shared across controllers.

pub mod id_path;

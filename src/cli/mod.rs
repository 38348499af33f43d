//! CLI infrastructure for the ttt-oracle analysis binary
//!
//! This module provides the command-line interface for solving positions
//! and inspecting the reachable state space.

pub mod output;
pub mod solve;
pub mod tree;

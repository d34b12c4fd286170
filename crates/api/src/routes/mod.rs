//! Route handlers

pub mod actions;
pub mod classify;

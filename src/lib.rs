//! chat-outline: navigable outlines for rendered AI chat conversations.
//!
//! A rendered conversation is flat HTML with no promise of semantic markup. This crate finds the
//! messages in it with a site-specific [`strategies::Strategy`], classifies headings and code
//! blocks, rebuilds their nesting from heading levels, splits the result into sections at
//! top-level headings, and projects the outline through a set of collapsed units for display.

pub mod classify;
pub mod config;
pub mod debounce;
pub mod error;
pub mod export;
pub mod hierarchy;
pub mod outliner;
pub mod section;
pub mod strategies;
pub mod unit;
pub mod visibility;
pub mod watch;

pub use error::{Error, Result};

// Copyright 2026 the Cropframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=cropframe_edit_state --heading-base-level=0

//! Cropframe Edit State: interaction phase tracking for a crop view.
//!
//! This crate provides the small state machines that sit between raw
//! gesture notifications and the crop geometry in `cropframe_geometry`.
//! Each module handles one concern:
//!
//! - [`session`]: The idle/editing phase machine with its settle delay
//! - [`settle`]: The underlying one-shot deadline timer
//! - [`reset`]: Whether the view has drifted enough to offer a reset
//!
//! ## Design Philosophy
//!
//! Everything here is host-agnostic and clock-free. Instead of scheduling
//! callbacks, the machines accept monotonic millisecond timestamps from the
//! caller and report transitions as return values, exactly once per actual
//! change. Hosts poll from whatever frame or timer source they already
//! have.
//!
//! ## Usage Patterns
//!
//! ### Gesture lifecycle
//!
//! Feed gesture begin/end notifications into an
//! [`session::EditSession`] and poll it for the settle transition:
//!
//! ```rust
//! use cropframe_edit_state::session::{EditSession, EditTransition};
//!
//! let mut session = EditSession::default();
//!
//! assert_eq!(session.begin(), Some(EditTransition::Began));
//! session.end(1000);
//!
//! // Poll from the host's frame callback.
//! assert_eq!(session.poll(1500), None);
//! assert_eq!(session.poll(1800), Some(EditTransition::Settled));
//! ```
//!
//! ### Reset availability
//!
//! Pair the session with a [`reset::ResetWatch`] so the host knows when a
//! reset affordance should appear:
//!
//! ```rust
//! use cropframe_edit_state::reset::ResetWatch;
//! use cropframe_geometry::ZoomState;
//! use kurbo::Vec2;
//!
//! let mut reset = ResetWatch::default();
//! reset.rebase(Vec2::ZERO);
//!
//! // Gestures force it on; settling at the fitted state turns it off.
//! assert_eq!(reset.force_resettable(), Some(true));
//! let zoom = ZoomState::at_minimum(0.25, 12.0);
//! assert_eq!(reset.update(zoom, Vec2::ZERO), Some(false));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod reset;
pub mod session;
pub mod settle;

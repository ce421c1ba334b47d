//! Pointer-input normalization for the Easel raster editor.
//!
//! This crate is the single translation boundary between the host windowing
//! system's pointer events and the editor's drawing tools. The host delivers
//! mutable, bit-flag-based occurrences in window coordinates; tools consume
//! immutable [`event::PointerEvent`] values carrying canvas coordinates and
//! decoded modifier/button state. Nothing here owns an event loop, holds a
//! widget, or keeps state between events: the codec is a pure function of its
//! inputs, and the view transform is fetched fresh from the workspace for
//! every occurrence so zoom-while-hovering is always reflected.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`view`] | Pan/zoom view transform and window↔canvas conversion |
//! | [`input`] | Modifier bit-set and mouse-button decoding |
//! | [`event`] | Canonical pointer event: raw occurrences in, immutable snapshots out |

pub mod event;
pub mod input;
pub mod view;

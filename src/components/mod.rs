//! Page behaviors, each constructed independently from its element handles.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components hold no references to each other. A missing element only
//! disables the component that needed it.

pub mod anchors;
pub mod footer;
pub mod header;
pub mod nav;
pub mod reveal;
pub mod showcase;
pub mod theme;
pub mod viewer;

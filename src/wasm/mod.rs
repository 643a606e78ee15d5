//! WASM library entry point for `GauchoClass`
//! Exports the course catalog to JavaScript/TypeScript

mod rs;

pub use rs::bindings::*;

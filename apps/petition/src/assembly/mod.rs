// Petition assembly engine.
// Implements: fragment store, block selection, placeholder substitution, pipeline, HTTP handlers.
// Everything below `handlers` is synchronous; the web adapter runs it on the blocking pool.

pub mod assembler;
pub mod handlers;
pub mod placeholder;
pub mod selector;
pub mod store;

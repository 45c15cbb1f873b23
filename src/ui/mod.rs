//! Drawing layer. Views paint into a backend-neutral [`core::painter::Painter`];
//! only `backend::terminal` knows about ratatui.

pub mod backend;
pub mod core;

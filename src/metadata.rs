//! Schema model shared by the validator and the follow-up advisor.
//!
//! Built wholesale from the embedded database every time one is loaded and
//! never mutated afterwards; the session shares it behind an `Arc`.
crate::reexport!(column);
crate::reexport!(table);
crate::reexport!(schema);

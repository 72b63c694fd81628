//! Pure query analysis: validation / auto-repair and database error diagnosis.
crate::reexport!(distance);
crate::reexport!(issue);
crate::reexport!(validator);
crate::reexport!(diagnosis);

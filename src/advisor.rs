//! Follow-up advisor: ranked next-query suggestions from the shape of a
//! previous result.
mod rewrite;
crate::reexport!(shape);
crate::reexport!(catalog);
crate::reexport!(suggestion);
crate::reexport!(suggestion_tests, test);

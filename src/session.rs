//! Host-side session: the state the editor works on, the commands a user can
//! issue, and the dispatcher tying them to the database, the validator, the
//! advisor and the assistant.
crate::reexport!(history);
crate::reexport!(state);
crate::reexport!(command);
crate::reexport!(dispatcher);
crate::reexport!(render);
crate::reexport!(input);
crate::reexport!(dispatcher_tests, test);

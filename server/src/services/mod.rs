//! Hub business logic, kept out of the transport layer so tests can drive
//! it with plain channels.

pub mod session;

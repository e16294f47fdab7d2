/// Domain layer for the wanted-persons listing
///
/// Pure data types and pure functions: no I/O happens here.
pub mod domain;
pub mod services;

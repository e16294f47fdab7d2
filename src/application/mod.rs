/// Application layer - Use cases and read models
///
/// This layer drives the wanted-list page: it owns the view state and
/// coordinates the repository, renderer and browser through ports.
pub mod factories;
pub mod read_models;
pub mod use_cases;

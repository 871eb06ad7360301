/// Dependency-tree core - pure parsing and serialization logic
///
/// This module has no I/O dependencies. It receives text lines and
/// returns structured values; adapters take care of everything else.
pub mod domain;
pub mod services;

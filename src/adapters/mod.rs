/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: file system, console
/// and output formats.
pub mod outbound;

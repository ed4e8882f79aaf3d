/// Ports module defining interfaces for hexagonal architecture
///
/// Inbound ports are what the CLI drives; outbound ports are what the
/// replay use case drives (file system, console, formatters).
pub mod inbound;
pub mod outbound;

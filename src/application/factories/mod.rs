mod filter_chain_factory;
mod formatter_factory;
mod presenter_factory;

pub use filter_chain_factory::FilterChainFactory;
pub use formatter_factory::FormatterFactory;
pub use presenter_factory::{PresenterFactory, PresenterType};

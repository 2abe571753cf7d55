//! Command-line surface over the graph library.

pub mod commands;

pub use commands::{load_graph, GraphDescription};

/// Install a stderr logger when `verbose` is set.
///
/// Returns whether a logger was installed by this call; a logger that is
/// already in place is left alone.
pub fn init_logging(verbose: bool) -> bool {
    if !verbose {
        return false;
    }
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Debug)
        .try_init()
        .is_ok()
}

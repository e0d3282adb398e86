//! Output bookkeeping shared by language generators.

mod imports;

pub use imports::ImportCollector;

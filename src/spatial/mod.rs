pub mod index;

pub use hit_test::HitTester;
pub use index::{IndexedSymbol, SymbolIndex};

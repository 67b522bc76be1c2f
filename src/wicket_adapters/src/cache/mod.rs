pub mod calc_cache;

pub use calc_cache::CalcCache;

mod digits;
pub use digits::parse_digits;

mod iter;
pub use iter::PeekIter;

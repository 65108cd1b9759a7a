pub mod syntax;
pub mod matching;

// Re-exports so other crates can just use `css::...` nicely.
pub use syntax::{
    CompoundSelector, SelectorError, SelectorList, SimpleSelector, parse_selector_list,
};
pub use matching::{matches_compound, matches_list, select_all};

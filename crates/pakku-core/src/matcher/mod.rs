pub mod layout;
pub mod packlist;

pub use layout::Layout;
pub use packlist::{PacklistMatcher, is_resolution_tag};

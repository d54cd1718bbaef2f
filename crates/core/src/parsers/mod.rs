pub mod frontmatter;

pub use frontmatter::{Frontmatter, parse_frontmatter};

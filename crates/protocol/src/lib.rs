pub mod commands;
pub mod motion;
pub mod shared_str;
pub mod theme;
pub mod types;

pub use commands::{RenderCommand, TextAlign};
pub use motion::{Easing, Motion};
pub use shared_str::SharedStr;
pub use theme::ThemeToken;
pub use types::{Color, Point, Rect, Viewport};

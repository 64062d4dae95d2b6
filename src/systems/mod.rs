pub mod core;
pub mod ui;

pub use self::core::*;
pub use self::ui::*;

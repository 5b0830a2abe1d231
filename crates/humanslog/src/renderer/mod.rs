//! Human-readable event renderer
//!
//! Output for one event:
//! ```text
//! [INFO][3:04PM] started
//! +------+------+
//! | port | 8080 |
//! +------+------+
//! ```
//! - severity label colored by the [`Palette`](crate::palette::Palette)
//! - local wall-clock time in kitchen format
//! - message in bold
//! - one table row per attribute, omitted when there are none

mod core;
mod event;
mod table;

pub use self::core::Renderer;
pub use self::table::AttributeTable;

//! # TUI Components
//!
//! All UI pieces of the single pgin screen. Each one is stateless and
//! props-based: the parent passes in exactly what it draws.
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── message_box.rs   (bordered box with the server message)
//! ├── help_bar.rs      (key hint under the box)
//! └── error_line.rs    (single-line failure report)
//! ```

pub mod error_line;
pub mod help_bar;
pub mod message_box;

pub use error_line::ErrorLine;
pub use help_bar::HelpBar;
pub use message_box::MessageBox;

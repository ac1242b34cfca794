//! # TUI Components
//!
//! All UI components for the terminal flashcard screen.
//!
//! ## Component Architecture
//!
//! Every component here is stateless: it is rebuilt each frame from props
//! (struct fields) and renders into the `Rect` it is given.
//!
//! - `Header`: deck title, subtitle, progress gauge
//! - `CardPanel`: the flashcard, question or answer face
//! - `Controls`: previous / counter / reset / next buttons
//! - `Footer`: keyboard hints and source note
//!
//! ### Props-Based Data Flow
//!
//! Components receive external data as props, never by reaching into the
//! navigator. Styles come in the same way, through a borrowed `Theme`.
//!
//! ```rust,ignore
//! // Good: dependencies are explicit
//! Controls { position, total, at_first, at_last, theme: &tui.theme }.render(frame, area);
//!
//! // Bad: hidden dependency on global state
//! Controls::render(frame, area); // reads from the navigator
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs       (this file)
//! ├── header.rs    (title + progress)
//! ├── card.rs      (flashcard faces)
//! ├── controls.rs  (button row + hit-testing geometry)
//! └── footer.rs    (hints)
//! ```

pub mod card;
pub mod controls;
pub mod footer;
pub mod header;

pub use card::CardPanel;
pub use controls::{Controls, ControlsLayout};
pub use footer::Footer;
pub use header::Header;

//! # Presentation Layer
//!
//! MVVM-style split, kept deliberately small:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ View ] --> text / placed text
//!  (owns state)     (pure fn)         (raw data)       (layout)          |
//!                                                                        v
//!                                                                  [ Renderer ]
//!                                                            console or ratatui frame
//! ```
//!
//! ## Rules
//!
//! 1. **ViewModels carry raw data.** Counts, ranks and timestamps, not
//!    pre-formatted strings. Formatting is the View's job.
//! 2. **UI state stays in the handler.** City filter, mode index and page
//!    offset never live in a ViewModel; the presenter reads them to build a
//!    fresh snapshot each frame.
//! 3. **Layout is pure.** `views::explorer::layout` maps a ViewModel and the
//!    current terminal size to positioned text, so it can be tested without
//!    a terminal. Anything that lands off-screen is clipped by the renderer.

pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

//! Chanmon Events
//!
//! The event-creation wizard: a multi-step flow that collects the details
//! of a community event (title, date, duration, location, summary,
//! description) one answer at a time.
//!
//! Modeled as an explicit finite-state machine: [`NewEventFlow`] owns the
//! current [`FlowStep`] and the partially-filled draft, validates each
//! answer before advancing, and only yields the finished [`EventDraft`]
//! once every step has been answered. There is no shared per-message
//! context being mutated behind the scenes.
//!
//! # Examples
//!
//! ```
//! use chanmon_events::{FlowStep, NewEventFlow};
//!
//! let mut flow = NewEventFlow::new();
//! assert_eq!(flow.step(), FlowStep::Title);
//!
//! flow.advance("Rustaceans meetup").unwrap();
//! flow.advance("2026-09-15").unwrap();
//! flow.advance("90").unwrap();
//! flow.advance("Kimura, 152 E Pecan St #102, San Antonio, TX 78205").unwrap();
//! flow.advance("Monthly meetup over noodles.").unwrap();
//! flow.advance("Talks, food, and open hacking time.").unwrap();
//!
//! let draft = flow.finish().unwrap();
//! assert_eq!(draft.title, "Rustaceans meetup");
//! assert_eq!(draft.duration_minutes, 90);
//! ```

#![warn(missing_docs)]

mod flow;

pub use flow::{EventDraft, FlowError, FlowStep, NewEventFlow};

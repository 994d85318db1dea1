//! Session gate and assessment flow.
//!
//! [`Flow`] is the page state machine (gate, assessment, results). Gate state
//! that outlives a single flow lives in a [`SessionContext`], passed
//! explicitly to the handlers that read or write it.
//!
//! Transitions:
//!
//! - start: gate, unless the session already passed the gate; then results if
//!   the link carries all 25 answers, otherwise assessment
//! - gate -> results when the link answers are complete, else assessment
//! - assessment -> results after the last dimension is complete
//! - results -> assessment on retake, clearing answers and the fragment

mod flow;
mod store;

pub use flow::{Advance, Flow, FlowError, Page};
pub use store::{
    default_store_path, FileSessionStore, MemorySessionStore, SessionContext, SessionStore,
    CONTACT_KEY, GATE_SATISFIED_KEY,
};

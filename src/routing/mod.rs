//! First-match evaluators over a compiled domain map
//!
//! These answer the questions the edge and mail runtimes ask of the plan
//! (where does this host redirect, which receipt rule takes this recipient,
//! where does this alias forward) without any network or mail transport.

mod edge;
mod forwarding;
mod mail;

pub use edge::{EdgeRouter, RedirectDecision};
pub use forwarding::{extract_address, ForwardInstruction, ForwardingTable};
pub use mail::MailRouter;

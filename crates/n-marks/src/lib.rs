//! # n-marks — Line bookmarks for n-nvim
//!
//! Per-buffer sets of anonymous line bookmarks: toggle a mark on any line,
//! cycle through the marks of a buffer with wraparound, and keep every mark
//! pointing at the right line as edits insert and delete lines around it.
//!
//! - **[`marks`]** — [`MarkSet`](marks::MarkSet): one buffer's sorted mark
//!   lines, plus the renumbering that follows a line-count change
//! - **[`nav`]** — stateless next/previous queries with wraparound
//! - **[`store`]** — [`MarkStore`](store::MarkStore): buffer id → mark set
//!   registry, the surface the host integration calls into
//!
//! # Host contract
//!
//! The library owns only line numbers. The host owns everything visible:
//!
//! - after [`toggle`](store::MarkStore::toggle), place or remove the line's
//!   gutter glyph according to the returned [`Toggle`](marks::Toggle);
//! - after every buffer-modifying event, call
//!   [`reconcile`](store::MarkStore::reconcile) with the buffer's new line
//!   count and the edit's origin line, then re-anchor glyphs per the
//!   returned [`Reconcile`](marks::Reconcile);
//! - on a next/previous command, move the cursor to the returned
//!   [`Target`](nav::Target) line, and show a "wrapped around" message when
//!   its `wrapped` flag is set.
//!
//! Hosts that only expose cursor-movement hooks (no explicit edit events)
//! can call `reconcile` from that hook with the cursor line as the origin:
//! a call where the line count did not change is a free no-op. Note the
//! origin is then best-effort, which is also why a multi-line deletion can
//! only shift marks, never prove a particular marked line was deleted — the
//! single-line case is the one deletion this scheme detects exactly.
//!
//! Lines are 1-indexed throughout, matching sign placement and what the
//! user sees in the gutter.

pub mod marks;
pub mod nav;
pub mod store;

// scramble-core: value types shared by the game engine and its front ends.
//
// Nothing in this crate performs I/O or holds session state. The engine
// (scramble-game) builds on these types; the CLI and WASM bindings only ever
// see them read-only.

pub mod constants;
pub mod rejection;
pub mod tally;
pub mod word;

pub use rejection::RejectionReason;
pub use tally::ScoreTally;

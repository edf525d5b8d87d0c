//! wally-scaffold: Emit the generated source for Wally's simulated
//! account-linking page.

pub mod preview;
pub mod template;

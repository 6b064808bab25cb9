pub mod authority;
pub mod burn;
pub mod fee;
pub mod freeze;
pub mod initialize;
pub mod mint;
pub mod pause;
pub mod reserves;
pub mod roles;
pub mod wipe;

pub use authority::*;
pub use burn::*;
pub use freeze::*;
pub use initialize::*;
pub use mint::*;
pub use roles::*;
pub use wipe::*;

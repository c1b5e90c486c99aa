pub mod core;
pub mod poller;

pub use self::core::EventSender;
pub use poller::{Poller, Tick};

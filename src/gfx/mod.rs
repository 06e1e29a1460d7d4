#[cfg(feature = "hardware")]
mod hardware;
mod headless;
mod interactible;
#[cfg(test)]
mod mockhardware;

#[cfg(feature = "hardware")]
pub use hardware::Hardware;
pub use headless::Headless;
pub use interactible::{Interactible, PollResult, Request};
#[cfg(test)]
pub use mockhardware::MockHardware;

mod panel;
mod playground;

pub use panel::Panel;
pub use playground::Playground;

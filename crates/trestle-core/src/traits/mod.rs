//! OS-facing seams.
//!
//! Each asynchronous OS API is modeled as a single-resolution future: the
//! returned future resolves exactly once, standing in for the one callback
//! the OS fires per request.

mod platform;
mod plugins;

pub use platform::{IDeviceInfoSource, IPermissionPrompter, IPushRegistrar};
pub use plugins::{IPluginRegistrar, NoopPluginRegistrar};

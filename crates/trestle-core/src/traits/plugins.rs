/// Managed-runtime plugin registration, invoked exactly once at startup
/// before the channel opens. External collaborator; the bridge only
/// sequences it.
pub trait IPluginRegistrar: Send + Sync {
    fn register_plugins(&self);
}

/// No-op registrar for hosts without a plugin set.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPluginRegistrar;

impl IPluginRegistrar for NoopPluginRegistrar {
    fn register_plugins(&self) {}
}

/// Device reachability, as last reported by the platform.
pub trait ConnectivityProbePort: Send + Sync {
    /// Synchronous; must not block on the network.
    fn is_online(&self) -> bool;
}

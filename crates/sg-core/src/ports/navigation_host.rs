use crate::navigation::NavigationTarget;

/// The UI shell that owns the mounted navigation stacks.
pub trait NavigationHostPort: Send + Sync {
    /// Replace the visible top-level stack. Calling it with the already
    /// active target must be harmless.
    fn replace_stack(&self, target: NavigationTarget);
}

//! Process-wide default registry

use std::sync::OnceLock;

use crate::registry::IbanRegistry;

static GLOBAL: OnceLock<IbanRegistry> = OnceLock::new();

/// The shared registry, built from the built-ins on first use.
///
/// Concurrent first callers all observe the same instance. It is
/// read-only afterwards; callers needing mutation own an `IbanRegistry`.
pub fn global() -> &'static IbanRegistry {
    GLOBAL.get_or_init(|| {
        tracing::debug!("Initialising default IBAN registry");
        IbanRegistry::with_builtins()
    })
}

/// Install `registry` as the shared one.
///
/// Must run before the first call to [`global`]; afterwards the rejected
/// registry is handed back.
pub fn install(registry: IbanRegistry) -> Result<(), IbanRegistry> {
    GLOBAL.set(registry)
}

use core::sync::atomic::{AtomicBool, Ordering};

static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Proof that the process entry point initialized the scroll runtime.
///
/// Views can only be mounted with this token, which makes the one-time setup an explicit step
/// in `main` rather than a side effect of importing a module.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollRuntime {
    _private: (),
}

impl ScrollRuntime {
    /// Initializes the runtime. Idempotent: later calls return the same token.
    pub fn init() -> Self {
        if !INITIALIZED.swap(true, Ordering::AcqRel) {
            fdebug!("ScrollRuntime::init");
        }
        Self { _private: () }
    }

    /// Returns the token if [`ScrollRuntime::init`] has already run.
    pub fn get() -> Option<Self> {
        Self::is_initialized().then_some(Self { _private: () })
    }

    pub fn is_initialized() -> bool {
        INITIALIZED.load(Ordering::Acquire)
    }
}

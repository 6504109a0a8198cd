// Host application services consumed by player backends

use crate::data_cache::DataCache;
use std::ffi::c_void;
use std::ptr::NonNull;
use std::sync::Arc;

/// Native display connection owned by the windowing system (an X11 `Display*`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayHandle(NonNull<c_void>);

/// Native rendering context owned by the windowing system (a `GLXContext`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlContextHandle(NonNull<c_void>);

// The handles are only passed through to the playback engine; the host keeps
// ownership and this crate never dereferences them.
unsafe impl Send for DisplayHandle {}
unsafe impl Sync for DisplayHandle {}
unsafe impl Send for GlContextHandle {}
unsafe impl Sync for GlContextHandle {}

impl DisplayHandle {
    pub fn new(ptr: *mut c_void) -> Option<Self> {
        NonNull::new(ptr).map(Self)
    }

    pub fn as_ptr(self) -> *mut c_void {
        self.0.as_ptr()
    }
}

impl GlContextHandle {
    pub fn new(ptr: *mut c_void) -> Option<Self> {
        NonNull::new(ptr).map(Self)
    }

    pub fn as_ptr(self) -> *mut c_void {
        self.0.as_ptr()
    }
}

/// The application main loop
pub trait Application: Send + Sync {
    /// True when called on the UI/render thread
    fn is_current_thread(&self) -> bool;
}

/// GUI window stack
pub trait WindowManager: Send + Sync {
    fn close_dialogs(&self, force: bool);
}

/// Windowing system with the active display and rendering context
pub trait Windowing: Send + Sync {
    fn display(&self) -> Option<DisplayHandle>;
    fn gl_context(&self) -> Option<GlContextHandle>;
}

/// Services a player backend needs from the host
#[derive(Clone)]
pub struct Host {
    pub application: Arc<dyn Application>,
    pub window_manager: Arc<dyn WindowManager>,
    pub windowing: Arc<dyn Windowing>,
    pub data_cache: Arc<DataCache>,
}

impl Host {
    /// Host services publishing into the process-wide data cache
    pub fn new(
        application: Arc<dyn Application>,
        window_manager: Arc<dyn WindowManager>,
        windowing: Arc<dyn Windowing>,
    ) -> Self {
        Self {
            application,
            window_manager,
            windowing,
            data_cache: DataCache::global(),
        }
    }

    pub fn with_data_cache(mut self, data_cache: Arc<DataCache>) -> Self {
        self.data_cache = data_cache;
        self
    }
}

/// Scriptable host services for tests
#[cfg(any(test, feature = "test-util"))]
pub mod fake {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::thread::{self, ThreadId};

    /// Application whose UI thread is the thread that created it
    pub struct FakeApplication {
        ui_thread: ThreadId,
    }

    impl FakeApplication {
        pub fn new() -> Self {
            Self {
                ui_thread: thread::current().id(),
            }
        }
    }

    impl Default for FakeApplication {
        fn default() -> Self {
            Self::new()
        }
    }

    impl Application for FakeApplication {
        fn is_current_thread(&self) -> bool {
            thread::current().id() == self.ui_thread
        }
    }

    #[derive(Default)]
    pub struct FakeWindowManager {
        closed: AtomicUsize,
        last_force: AtomicBool,
    }

    impl FakeWindowManager {
        pub fn close_count(&self) -> usize {
            self.closed.load(Ordering::SeqCst)
        }

        pub fn last_force(&self) -> bool {
            self.last_force.load(Ordering::SeqCst)
        }
    }

    impl WindowManager for FakeWindowManager {
        fn close_dialogs(&self, force: bool) {
            self.last_force.store(force, Ordering::SeqCst);
            self.closed.fetch_add(1, Ordering::SeqCst);
        }
    }

    /// Windowing system with dummy, never dereferenced native handles
    pub struct FakeWindowing {
        has_display: AtomicBool,
        has_context: AtomicBool,
    }

    impl FakeWindowing {
        pub fn new() -> Self {
            Self {
                has_display: AtomicBool::new(true),
                has_context: AtomicBool::new(true),
            }
        }

        pub fn set_display_available(&self, available: bool) {
            self.has_display.store(available, Ordering::SeqCst);
        }

        pub fn set_context_available(&self, available: bool) {
            self.has_context.store(available, Ordering::SeqCst);
        }
    }

    impl Default for FakeWindowing {
        fn default() -> Self {
            Self::new()
        }
    }

    impl Windowing for FakeWindowing {
        fn display(&self) -> Option<DisplayHandle> {
            if self.has_display.load(Ordering::SeqCst) {
                DisplayHandle::new(NonNull::<c_void>::dangling().as_ptr())
            } else {
                None
            }
        }

        fn gl_context(&self) -> Option<GlContextHandle> {
            if self.has_context.load(Ordering::SeqCst) {
                GlContextHandle::new(NonNull::<c_void>::dangling().as_ptr())
            } else {
                None
            }
        }
    }

    /// A full fake host with its own data cache
    pub struct FakeHost {
        pub application: Arc<FakeApplication>,
        pub window_manager: Arc<FakeWindowManager>,
        pub windowing: Arc<FakeWindowing>,
        pub data_cache: Arc<DataCache>,
    }

    impl FakeHost {
        pub fn new() -> Self {
            Self {
                application: Arc::new(FakeApplication::new()),
                window_manager: Arc::new(FakeWindowManager::default()),
                windowing: Arc::new(FakeWindowing::new()),
                data_cache: Arc::new(DataCache::new()),
            }
        }

        pub fn host(&self) -> Host {
            Host::new(
                self.application.clone(),
                self.window_manager.clone(),
                self.windowing.clone(),
            )
            .with_data_cache(self.data_cache.clone())
        }
    }

    impl Default for FakeHost {
        fn default() -> Self {
            Self::new()
        }
    }
}

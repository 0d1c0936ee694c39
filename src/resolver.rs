//! Case-source resolution for declared test cases.
//!
//! `#[data_driven]` gives every annotated test function a `static` [`CaseSource`] and enters it on a thread-local
//! stack of *declared-case frames* while the function body runs. [`resolve`] walks that stack from the innermost
//! frame outward, skipping as many frames as the harness is configured to skip.
//!
//! ## Notes
//!
//! - Only annotated functions push frames. Wrapper functions and factories in between do not change what
//!   resolves, so direct construction and the `TestData` factory share the same default skip count.
//! - Resolution is bound to the calling thread and must happen synchronously, while the frame is entered.
//! - A skip count larger than the stack depth resolves nothing. The harness logs a warning and arranges no cases,
//!   which surfaces later as the "no test cases" failure.

use std::cell::RefCell;
use std::fmt;
use std::marker::PhantomData;

use ddtest_core::TestCase;

/// The declared cases of one test function.
pub struct CaseSource {
    module_path: &'static str,
    function: &'static str,
    file: &'static str,
    line: u32,
    cases: fn() -> Vec<TestCase>,
}

impl CaseSource {
    pub const fn new(
        module_path: &'static str,
        function: &'static str,
        file: &'static str,
        line: u32,
        cases: fn() -> Vec<TestCase>,
    ) -> Self {
        Self {
            module_path,
            function,
            file,
            line,
            cases,
        }
    }

    pub fn module_path(&self) -> &'static str {
        self.module_path
    }

    pub fn function(&self) -> &'static str {
        self.function
    }

    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    /// `module::path::function`
    pub fn qualified_name(&self) -> String {
        format!("{}::{}", self.module_path, self.function)
    }

    /// Build the declared tuples, in declaration order.
    pub fn cases(&self) -> Vec<TestCase> {
        (self.cases)()
    }
}

impl fmt::Debug for CaseSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaseSource")
            .field("function", &self.qualified_name())
            .field("file", &self.file)
            .field("line", &self.line)
            .finish()
    }
}

thread_local! {
    static FRAMES: RefCell<Vec<&'static CaseSource>> = const { RefCell::new(Vec::new()) };
}

/// Keeps a declared-case frame entered; leaving scope (or unwinding) pops it.
#[must_use = "the frame is popped as soon as the guard is dropped"]
pub struct FrameGuard {
    depth: usize,
    _not_send: PhantomData<*const ()>,
}

impl Drop for FrameGuard {
    fn drop(&mut self) {
        let _ = FRAMES.try_with(|frames| frames.borrow_mut().truncate(self.depth - 1));
    }
}

/// Enter `source` as the innermost declared-case frame of the current thread.
pub fn enter(source: &'static CaseSource) -> FrameGuard {
    let depth = FRAMES.with(|frames| {
        let mut frames = frames.borrow_mut();
        frames.push(source);
        frames.len()
    });
    tracing::trace!(function = %source.qualified_name(), depth, "entered declared-case frame");
    FrameGuard {
        depth,
        _not_send: PhantomData,
    }
}

/// Resolve the declared-case frame `skip_frames` levels out from the innermost one.
#[tracing::instrument(level = "debug", skip_all, fields(skip_frames = skip_frames))]
pub fn resolve(skip_frames: usize) -> Option<&'static CaseSource> {
    let resolved = FRAMES.with(|frames| {
        let frames = frames.borrow();
        frames
            .len()
            .checked_sub(skip_frames + 1)
            .and_then(|index| frames.get(index).copied())
    });
    if let Some(source) = resolved {
        tracing::debug!(function = %source.qualified_name(), "resolved declared cases");
    }
    resolved
}

/// Number of declared-case frames currently entered on this thread.
pub fn depth() -> usize {
    FRAMES.with(|frames| frames.borrow().len())
}

/// The entered frames, outermost first.
pub fn current_frames() -> Vec<&'static CaseSource> {
    FRAMES.with(|frames| frames.borrow().clone())
}

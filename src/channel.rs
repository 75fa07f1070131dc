//! Bounded command queue shared between contexts.
//!
//! The engine itself is single threaded. When another context (an input
//! task, an interrupt, a UI thread) needs to change the face, it posts
//! [`EyeCommand`]s here and the render loop drains them before the next
//! frame. Access is serialized with `critical-section`, storage is a
//! fixed-size `heapless::Deque`.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::command::EyeCommand;

/// Error returned when the queue has no room; gives the command back
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueueFull(pub EyeCommand);

/// Fixed-capacity queue of pending commands
pub struct CommandQueue<const N: usize> {
    inner: Mutex<RefCell<Deque<EyeCommand, N>>>,
}

impl<const N: usize> CommandQueue<N> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Queue a command for the next frame
    pub fn post(&self, command: EyeCommand) -> Result<(), QueueFull> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(command).map_err(QueueFull)
        })
    }

    /// Take the oldest pending command
    pub fn take(&self) -> Option<EyeCommand> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().pop_front())
    }

    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every pending command
    pub fn clear(&self) {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().clear());
    }
}

impl<const N: usize> Default for CommandQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

//! # Order State
//!
//! Hands out order numbers for submitted orders.
//!
//! Numbers run from `order_number_start` to `order_number_end` and wrap
//! back to the start, so the number on the pickup screen stays short.

use std::sync::atomic::{AtomicU32, Ordering};

use crate::state::ConfigState;

#[derive(Debug)]
pub struct OrderState {
    next: AtomicU32,
    start: u32,
    end: u32,
}

impl OrderState {
    pub fn new(start: u32, end: u32) -> Self {
        let (start, end) = if start <= end { (start, end) } else { (end, start) };
        OrderState {
            next: AtomicU32::new(start),
            start,
            end,
        }
    }

    pub fn from_config(config: &ConfigState) -> Self {
        OrderState::new(config.order_number_start, config.order_number_end)
    }

    /// Takes the next order number.
    pub fn next_order_number(&self) -> u32 {
        let (start, end) = (self.start, self.end);
        let advance = |n: u32| Some(if n >= end { start } else { n + 1 });
        // fetch_update only fails when the closure returns None
        match self.next.fetch_update(Ordering::SeqCst, Ordering::SeqCst, advance) {
            Ok(n) | Err(n) => n,
        }
    }
}

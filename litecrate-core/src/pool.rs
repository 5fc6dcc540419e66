// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use crate::buffer::Crate;
use crate::config::Config;
use crate::util::Spinlock;
use std::cell::Cell;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Number of segments. Threads are spread over them to keep lock hold
/// times uncontended.
const NUM_SEGMENTS: usize = 16;

static NEXT_THREAD_SLOT: AtomicUsize = AtomicUsize::new(0);

thread_local! {
    static SEGMENT_INDEX: Cell<usize> =
        Cell::new(NEXT_THREAD_SLOT.fetch_add(1, Ordering::Relaxed) % NUM_SEGMENTS);
}

/// A pool of reusable buffers.
///
/// A borrowed buffer always starts with both cursors at zero. When it is
/// handed back it is `reset()`, or `full_clear()`ed if the pool was built
/// with [`CratePool::zero_on_return`], so earlier contents never leak into
/// the next borrower's reads. Storage is kept, which is the point of
/// pooling.
pub struct CratePool {
    segments: [Spinlock<Vec<Crate>>; NUM_SEGMENTS],
    size: usize,
    config: Config,
    zero_on_return: bool,
}

impl CratePool {
    /// Creates a pool whose fresh buffers have `size` bytes of storage.
    pub fn new(size: usize, config: Config) -> Self {
        CratePool {
            segments: std::array::from_fn(|_| Spinlock::new(Vec::new())),
            size,
            config,
            zero_on_return: false,
        }
    }

    /// Zero-fills buffers when they come back instead of only resetting
    /// their cursors.
    pub fn zero_on_return(mut self, zero: bool) -> Self {
        self.zero_on_return = zero;
        self
    }

    /// Number of idle buffers across all segments.
    pub fn idle(&self) -> usize {
        self.segments.iter().map(|s| s.lock().len()).sum()
    }

    /// Borrows a buffer for the duration of `handler`.
    #[inline]
    pub fn borrow_mut<R>(&self, handler: impl FnOnce(&mut Crate) -> R) -> R {
        let segment = &self.segments[SEGMENT_INDEX.with(Cell::get)];
        let popped = segment.lock().pop();
        let mut c = match popped {
            Some(c) => c,
            None => {
                tracing::debug!(size = self.size, "allocating pooled crate");
                Crate::new(self.size, self.config)
            }
        };
        let result = handler(&mut c);
        if self.zero_on_return {
            c.full_clear();
        } else {
            c.reset();
        }
        c.set_config(self.config);
        segment.lock().push(c);
        result
    }
}

// Copyright (C) 2024 Huawei Device Co., Ltd.
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Bridges native terminal events to a future.
//!
//! Native tasks take one handler per event. The `complete` and `fail`
//! handlers share a [`TerminalSender`]; whichever fires first delivers the
//! terminal event, later calls are ignored. Dropping every handler without
//! firing cancels the receiving side.

use std::sync::{Arc, Mutex, MutexGuard};

use futures::channel::oneshot;

pub(crate) struct TerminalSender<T> {
    inner: Arc<Mutex<Option<oneshot::Sender<T>>>>,
}

impl<T> Clone for TerminalSender<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> TerminalSender<T> {
    /// Delivers `value` unless a terminal event was already delivered.
    pub(crate) fn send(&self, value: T) -> bool {
        match self.lock().take() {
            Some(sender) => sender.send(value).is_ok(),
            None => false,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<oneshot::Sender<T>>> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

pub(crate) fn channel<T>() -> (TerminalSender<T>, oneshot::Receiver<T>) {
    let (tx, rx) = oneshot::channel();
    (
        TerminalSender {
            inner: Arc::new(Mutex::new(Some(tx))),
        },
        rx,
    )
}

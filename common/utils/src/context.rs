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

//! Application context utilities.
//!
//! A context identifies the calling application and owns the cache directory
//! that upload and download operations resolve relative paths against. Stage
//! model contexts expose the directory as a plain field, FA model contexts only
//! through an asynchronous accessor.

use std::fmt;
use std::sync::Arc;

use futures::future::BoxFuture;

/// Asynchronous cache directory accessor of an FA model context.
///
/// # Examples
///
/// ```rust
/// use futures::future::{BoxFuture, FutureExt};
/// use request_utils::context::CacheDirProvider;
///
/// struct Ability;
///
/// impl CacheDirProvider for Ability {
///     fn get_cache_dir(&self) -> BoxFuture<'static, Result<String, String>> {
///         async { Ok("/data/storage/el2/base/cache".to_string()) }.boxed()
///     }
/// }
/// ```
pub trait CacheDirProvider: Send + Sync {
    /// Resolves the cache directory, or fails with the accessor's message.
    fn get_cache_dir(&self) -> BoxFuture<'static, Result<String, String>>;
}

/// Handle to the application context a request runs in.
#[derive(Clone)]
pub struct Context {
    inner: ContextInner,
}

#[derive(Clone)]
enum ContextInner {
    Stage { cache_dir: String },
    Fa(Arc<dyn CacheDirProvider>),
}

/// Failure to resolve the cache directory of a context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextError {
    /// The context has no usable cache directory.
    Unavailable,
    /// The asynchronous accessor failed.
    Accessor(String),
}

impl fmt::Display for ContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextError::Unavailable => write!(f, "cache directory is unavailable"),
            ContextError::Accessor(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ContextError {}

impl Context {
    /// Creates a stage model context with a known cache directory.
    pub fn stage<S: Into<String>>(cache_dir: S) -> Self {
        Self {
            inner: ContextInner::Stage {
                cache_dir: cache_dir.into(),
            },
        }
    }

    /// Creates an FA model context whose cache directory is fetched on demand.
    pub fn fa(provider: Arc<dyn CacheDirProvider>) -> Self {
        Self {
            inner: ContextInner::Fa(provider),
        }
    }

    /// Determines whether this is a stage model context.
    pub fn is_stage_context(&self) -> bool {
        matches!(self.inner, ContextInner::Stage { .. })
    }

    /// Returns the cache directory if it can be read without suspending.
    ///
    /// Returns `None` for FA model contexts and for an empty directory.
    pub fn cache_dir(&self) -> Option<&str> {
        match &self.inner {
            ContextInner::Stage { cache_dir } if !cache_dir.is_empty() => Some(cache_dir),
            _ => None,
        }
    }

    /// Resolves the cache directory, awaiting the accessor of FA contexts.
    pub async fn resolve_cache_dir(&self) -> Result<String, ContextError> {
        if let Some(dir) = self.cache_dir() {
            return Ok(dir.to_string());
        }
        match &self.inner {
            ContextInner::Stage { .. } => Err(ContextError::Unavailable),
            ContextInner::Fa(provider) => match provider.get_cache_dir().await {
                Ok(dir) if !dir.is_empty() => Ok(dir),
                Ok(_) => Err(ContextError::Unavailable),
                Err(msg) => Err(ContextError::Accessor(msg)),
            },
        }
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            ContextInner::Stage { cache_dir } => f
                .debug_struct("Context")
                .field("stage", &true)
                .field("cache_dir", cache_dir)
                .finish(),
            ContextInner::Fa(_) => f.debug_struct("Context").field("stage", &false).finish(),
        }
    }
}

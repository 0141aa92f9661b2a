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

//! Plain requests over the netstack single-shot HTTP call.

use std::sync::Arc;

use futures::channel::oneshot;
use netstack_rs::{HttpClient, HttpClientError, HttpRequest, HttpResponse, RequestCallback};
use request_utils::{error, info};

use crate::config::RequestConfig;
use crate::error::{AxiosError, ErrorCode};
use crate::handle::NativeHandle;
use crate::options::{http_options, request_url};
use crate::settle::{settle, TransportOutcome};

/// Sends a plain request and settles its response.
///
/// The URL and options are validated before a native request object is
/// created. Once created, the object is destroyed exactly once after the
/// native callback has run.
///
/// # Errors
///
/// Validation errors, the native failure as `Native(code)` with the JSON form
/// of the native error as message, or the settlement rejection.
pub async fn send(
    client: &dyn HttpClient,
    config: Arc<RequestConfig>,
) -> Result<TransportOutcome, AxiosError> {
    let url = request_url(&config)?;
    let options = http_options(&config)?;

    let request = client.create_http();
    let (tx, rx) = oneshot::channel();
    let callback = SettleCallback {
        sender: Some(tx),
        request: Some(request.clone()),
        config: config.clone(),
    };
    info!("http {} {}", options.method, url);
    request.request(&url, options, Box::new(callback));

    match rx.await {
        Ok(Ok(outcome)) => settle(outcome),
        Ok(Err(e)) => Err(e),
        Err(_) => {
            error!("http request dropped its callback without an answer");
            Err(AxiosError::network("request finished without a response")
                .with_config(config)
                .with_request(NativeHandle::Http(request)))
        }
    }
}

// Delivers the answer of the native request, then destroys it.
struct SettleCallback {
    sender: Option<oneshot::Sender<Result<TransportOutcome, AxiosError>>>,
    request: Option<Arc<dyn HttpRequest>>,
    config: Arc<RequestConfig>,
}

impl SettleCallback {
    fn handle(&self) -> Option<NativeHandle> {
        self.request.clone().map(NativeHandle::Http)
    }

    fn finish(&mut self, result: Result<TransportOutcome, AxiosError>) {
        if let Some(sender) = self.sender.take() {
            let _ = sender.send(result);
        }
        self.release();
    }

    fn release(&mut self) {
        if let Some(request) = self.request.take() {
            request.destroy();
        }
    }
}

impl RequestCallback for SettleCallback {
    fn on_success(&mut self, response: HttpResponse) {
        let mut outcome = TransportOutcome::new(
            response.result,
            response.response_code,
            self.config.clone(),
        )
        .with_headers(response.header);
        if let Some(handle) = self.handle() {
            outcome = outcome.with_request(handle);
        }
        self.finish(Ok(outcome));
    }

    fn on_fail(&mut self, e: HttpClientError) {
        error!("http request failed: {}", e);
        let mut err = AxiosError::new(e.to_json(), ErrorCode::Native(e.code()))
            .with_config(self.config.clone());
        if let Some(handle) = self.handle() {
            err = err.with_request(handle);
        }
        self.finish(Err(err));
    }
}

impl Drop for SettleCallback {
    fn drop(&mut self) {
        self.release();
    }
}

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

use std::thread;

use futures::executor::block_on;
use netstack_rs::{HttpData, HttpResponse};
use request_utils::context::Context;
use tempfile::TempDir;

use super::*;
use crate::download::DOWNLOAD_SUCCESS;
use crate::error::ErrorCode;
use crate::fake::{client_for, unused_client, AgentMode, Answer, FakeAgent, FakeRequest};
use crate::form_data::FormData;

fn download_config(cache: &TempDir) -> RequestConfig {
    RequestConfig::builder()
        .method("GET")
        .url("/a")
        .file_path("f.bin")
        .context(Context::stage(cache.path().to_string_lossy()))
        .build()
}

// @tc.name: ut_select_transport
// @tc.desc: Test transport selection
// @tc.precon: NA
// @tc.step: 1. Select for form posts with and without context, GETs with
//              and without file path and other methods
// @tc.expect: Upload only for a form POST with context, download only for
//             a GET with a file path, plain otherwise
// @tc.type: FUNC
// @tc.require: issueNumber
// @tc.level: Level 0
#[test]
fn ut_select_transport() {
    let context = Context::stage("/data/cache");
    let form_post = RequestConfig::builder()
        .method("Post")
        .data(FormData::new())
        .context(context.clone())
        .build();
    assert_eq!(select_transport(&form_post), TransportKind::Upload);

    let form_put = RequestConfig::builder()
        .method("put")
        .data(FormData::new())
        .context(context.clone())
        .build();
    assert_eq!(select_transport(&form_put), TransportKind::Http);

    let form_no_context = RequestConfig::builder()
        .method("post")
        .data(FormData::new())
        .build();
    assert_eq!(select_transport(&form_no_context), TransportKind::Http);

    let text_post = RequestConfig::builder()
        .method("post")
        .data("text")
        .context(context)
        .build();
    assert_eq!(select_transport(&text_post), TransportKind::Http);

    let get_file = RequestConfig::builder().file_path("f.bin").build();
    assert_eq!(select_transport(&get_file), TransportKind::Download);

    let post_file = RequestConfig::builder().method("post").file_path("f.bin").build();
    assert_eq!(select_transport(&post_file), TransportKind::Http);

    let get_empty_path = RequestConfig::builder().file_path("").build();
    assert_eq!(select_transport(&get_empty_path), TransportKind::Http);

    assert_eq!(select_transport(&RequestConfig::default()), TransportKind::Http);
}

// @tc.name: ut_resolve_download_path
// @tc.desc: Test resolution of download destinations
// @tc.precon: NA
// @tc.step: 1. Resolve relative, cache-absolute and cache-less paths
// @tc.expect: Relative paths land in the cache directory, others are kept
// @tc.type: FUNC
// @tc.require: issueNumber
// @tc.level: Level 1
#[test]
fn ut_resolve_download_path() {
    assert_eq!(resolve_download_path("/data/cache", "f.bin"), "/data/cache/f.bin");
    assert_eq!(
        resolve_download_path("/data/cache", "/data/cache/sub/f.bin"),
        "/data/cache/sub/f.bin"
    );
    assert_eq!(resolve_download_path("", "/tmp/f.bin"), "/tmp/f.bin");
}

// @tc.name: ut_adapter_download_new_file
// @tc.desc: Test a GET with a free destination is downloaded
// @tc.precon: NA
// @tc.step: 1. Request GET /a with file path f.bin, nothing at the path
//           2. Fire complete from the service side
// @tc.expect: Resolves with "download success!" and status 200
// @tc.type: FUNC
// @tc.require: issueNumber
// @tc.level: Level 0
#[test]
fn ut_adapter_download_new_file() {
    request_utils::test::init();
    let cache = TempDir::new().unwrap();
    let agent = FakeAgent::new(AgentMode::Accept);
    let adapter = Adapter::new(Arc::new(unused_client()), agent.clone());

    let task = agent.download.clone();
    let service = thread::spawn(move || {
        task.wait_subscribed();
        task.fire_complete();
    });
    let outcome = block_on(adapter.request(download_config(&cache))).unwrap();
    service.join().unwrap();

    assert_eq!(outcome.data, HttpData::Text(DOWNLOAD_SUCCESS.to_string()));
    assert_eq!(outcome.status, 200);
    assert_eq!(agent.downloads.lock().unwrap().len(), 1);
}

// @tc.name: ut_adapter_download_existing_file
// @tc.desc: Test a GET whose destination exists is refused
// @tc.precon: NA
// @tc.step: 1. Create f.bin in the cache directory
//           2. Request GET /a with file path f.bin
// @tc.expect: Immediate BadOption, the download never starts
// @tc.type: FUNC
// @tc.require: issueNumber
// @tc.level: Level 0
#[test]
fn ut_adapter_download_existing_file() {
    let cache = TempDir::new().unwrap();
    std::fs::write(cache.path().join("f.bin"), b"old").unwrap();
    let agent = FakeAgent::new(AgentMode::Accept);
    let adapter = Adapter::new(Arc::new(unused_client()), agent.clone());

    let error = block_on(adapter.request(download_config(&cache))).unwrap_err();
    assert_eq!(error.code(), ErrorCode::BadOption);
    assert_eq!(error.message(), FILE_EXISTS);
    assert!(agent.downloads.lock().unwrap().is_empty());
}

// @tc.name: ut_adapter_upload_form
// @tc.desc: Test a form POST goes to the upload service
// @tc.precon: NA
// @tc.step: 1. Request a POST with a form holding a text and a buffer
// @tc.expect: The buffer is staged and listed as a file by its internal
//             URI, the text is listed as data
// @tc.type: FUNC
// @tc.require: issueNumber
// @tc.level: Level 0
#[test]
fn ut_adapter_upload_form() {
    let cache = TempDir::new().unwrap();
    let agent = FakeAgent::new(AgentMode::Refuse);
    let adapter = Adapter::new(Arc::new(unused_client()), agent.clone());
    let mut form = FormData::new();
    form.append("title", "holiday", None);
    form.append("photo", vec![0xffu8, 0xd8], Some("p.jpg"));
    let config = RequestConfig::builder()
        .method("POST")
        .url("https://example.com/upload")
        .context(Context::stage(cache.path().to_string_lossy()))
        .data(form)
        .build();

    let _ = block_on(adapter.request(config));
    let uploads = agent.uploads.lock().unwrap();
    assert_eq!(uploads.len(), 1);
    assert_eq!(uploads[0].files.len(), 1);
    assert_eq!(uploads[0].files[0].uri, "internal://cache/axios_temp/p.jpg");
    assert_eq!(uploads[0].data.len(), 1);
    assert_eq!(uploads[0].data[0].name, "title");
    assert_eq!(uploads[0].data[0].value, "holiday");
    assert!(cache.path().join("axios_temp").join("p.jpg").exists());
}

// @tc.name: ut_adapter_plain_request
// @tc.desc: Test other requests go to the HTTP client
// @tc.precon: NA
// @tc.step: 1. Request a GET without file path
// @tc.expect: The HTTP client answers and its request is destroyed once
// @tc.type: FUNC
// @tc.require: issueNumber
// @tc.level: Level 1
#[test]
fn ut_adapter_plain_request() {
    let request = FakeRequest::new(Answer::Success(HttpResponse {
        result: HttpData::Text("pong".to_string()),
        response_code: 200,
        ..Default::default()
    }));
    let agent = FakeAgent::new(AgentMode::Accept);
    let adapter = Adapter::new(Arc::new(client_for(request.clone())), agent.clone());
    let config = RequestConfig::builder().url("https://example.com/ping").build();

    let outcome = block_on(adapter.request(config)).unwrap();
    assert_eq!(outcome.data, HttpData::Text("pong".to_string()));
    assert_eq!(request.destroyed(), 1);
    assert!(agent.downloads.lock().unwrap().is_empty());
    assert!(agent.uploads.lock().unwrap().is_empty());
}

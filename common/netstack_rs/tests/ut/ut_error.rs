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

use super::*;

// @tc.name: ut_http_error_code_values
// @tc.desc: Test HttpErrorCode variants have the documented numeric values
// @tc.precon: NA
// @tc.step: 1. Verify numeric values of selected HttpErrorCode variants
// @tc.expect: Each variant has the expected numeric value
// @tc.type: FUNC
// @tc.require: issueNumber
// @tc.level: Level 1
#[test]
fn ut_http_error_code_values() {
    assert_eq!(HttpErrorCode::HttpNoneErr as i32, 0);
    assert_eq!(HttpErrorCode::HttpPermissionDeniedCode as i32, 201);
    assert_eq!(HttpErrorCode::HttpCouldntResolveHost as i32, 2300006);
    assert_eq!(HttpErrorCode::HttpOperationTimedout as i32, 2300028);
    assert_eq!(HttpErrorCode::HttpUnknownOtherError as i32, 2300999);
}

// @tc.name: ut_http_error_code_try_from
// @tc.desc: Test conversion from raw codes
// @tc.precon: NA
// @tc.step: 1. Convert documented and undocumented raw codes
// @tc.expect: Documented codes convert, others return the raw value
// @tc.type: FUNC
// @tc.require: issueNumber
// @tc.level: Level 1
#[test]
fn ut_http_error_code_try_from() {
    assert_eq!(
        HttpErrorCode::try_from(2300007),
        Ok(HttpErrorCode::HttpCouldntConnect)
    );
    assert_eq!(HttpErrorCode::try_from(2300004), Err(2300004));
    assert_eq!(HttpErrorCode::try_from(-1), Err(-1));
}

// @tc.name: ut_http_client_error_kind
// @tc.desc: Test HttpClientError accessors and kind fallback
// @tc.precon: NA
// @tc.step: 1. Create errors with documented and undocumented codes
//           2. Read code, kind and message
// @tc.expect: Raw code is kept, undocumented codes map to the default kind
// @tc.type: FUNC
// @tc.require: issueNumber
// @tc.level: Level 1
#[test]
fn ut_http_client_error_kind() {
    let error = HttpClientError::new(2300006, "Couldn't resolve host name");
    assert_eq!(error.code(), 2300006);
    assert_eq!(error.kind(), HttpErrorCode::HttpCouldntResolveHost);
    assert_eq!(error.msg(), "Couldn't resolve host name");

    let error = HttpClientError::new(12345, "odd");
    assert_eq!(error.code(), 12345);
    assert_eq!(error.kind(), HttpErrorCode::HttpUnknownOtherError);
}

// @tc.name: ut_http_client_error_to_json
// @tc.desc: Test JSON rendering of an error
// @tc.precon: NA
// @tc.step: 1. Create an error and render it as JSON
// @tc.expect: JSON contains code and message fields
// @tc.type: FUNC
// @tc.require: issueNumber
// @tc.level: Level 1
#[test]
fn ut_http_client_error_to_json() {
    let error = HttpClientError::new(2300028, "Timeout was reached");
    assert_eq!(
        error.to_json(),
        r#"{"code":2300028,"message":"Timeout was reached"}"#
    );
    assert_eq!(error.to_string(), "Timeout was reached (code 2300028)");
}

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

// @tc.name: ut_subscribe_type_names
// @tc.desc: Test event names of subscription types
// @tc.precon: NA
// @tc.step: 1. Convert each subscription type to its name
// @tc.expect: Names match the platform event names
// @tc.type: FUNC
// @tc.require: issueNumber
// @tc.level: Level 1
#[test]
fn ut_subscribe_type_names() {
    assert_eq!(SubscribeType::Progress.as_str(), "progress");
    assert_eq!(SubscribeType::HeaderReceive.as_str(), "headerReceive");
    assert_eq!(SubscribeType::Complete.as_str(), "complete");
    assert_eq!(SubscribeType::Fail.as_str(), "fail");
}

// @tc.name: ut_header_receive_default
// @tc.desc: Test an empty header receive event
// @tc.precon: NA
// @tc.step: 1. Create a default header receive event
// @tc.expect: No headers and no body
// @tc.type: FUNC
// @tc.require: issueNumber
// @tc.level: Level 2
#[test]
fn ut_header_receive_default() {
    let header = HeaderReceive::default();
    assert!(header.headers.is_empty());
    assert!(header.body.is_none());
}

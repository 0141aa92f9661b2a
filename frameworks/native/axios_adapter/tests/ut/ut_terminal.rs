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

use futures::executor::block_on;

use super::*;

// @tc.name: ut_terminal_first_event_wins
// @tc.desc: Test only the first terminal event is delivered
// @tc.precon: NA
// @tc.step: 1. Send twice through two clones of one sender
// @tc.expect: The first send succeeds, the second is ignored
// @tc.type: FUNC
// @tc.require: issueNumber
// @tc.level: Level 0
#[test]
fn ut_terminal_first_event_wins() {
    let (sender, receiver) = channel();
    let other = sender.clone();
    assert!(sender.send("complete"));
    assert!(!other.send("fail"));
    assert_eq!(block_on(receiver).unwrap(), "complete");
}

// @tc.name: ut_terminal_dropped_senders
// @tc.desc: Test dropping every sender cancels the receiver
// @tc.precon: NA
// @tc.step: 1. Drop both clones of a sender without sending
// @tc.expect: The receiver resolves to an error
// @tc.type: FUNC
// @tc.require: issueNumber
// @tc.level: Level 1
#[test]
fn ut_terminal_dropped_senders() {
    let (sender, receiver) = channel::<u8>();
    let other = sender.clone();
    drop(sender);
    drop(other);
    assert!(block_on(receiver).is_err());
}

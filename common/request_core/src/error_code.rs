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

//! Request service error codes.

/// Invalid or missing required parameters.
pub const PARAMETER_CHECK: i32 = 401;

/// File operation failed (reading, writing, accessing, etc.).
pub const FILE_OPERATION_ERR: i32 = 13400001;

/// Request service is not available.
pub const EXCEPTION_SERVICE: i32 = 13400003;

// Copyright 2025 dentsusoken
//
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

use crate::platform::{get_current_architecture, get_current_os};

/// Current LTS distribution queried when the UI does not name one.
pub const DEFAULT_JDK_VERSION: &str = "openjdk21";

/// Default JVM implementation queried when the UI does not name one.
pub const DEFAULT_JVM_IMPL: &str = "hotspot";

#[derive(Debug, Clone)]
pub struct ReleaseQuery {
    pub jdk_version: String,
    pub jvm_impl: String,
    pub os: String,
    pub arch: String,
    pub package_type: String,
    pub release: String,
}

impl Default for ReleaseQuery {
    fn default() -> Self {
        Self {
            jdk_version: DEFAULT_JDK_VERSION.to_string(),
            jvm_impl: DEFAULT_JVM_IMPL.to_string(),
            os: get_current_os(),
            arch: get_current_architecture(),
            package_type: "jdk".to_string(),
            release: "latest".to_string(),
        }
    }
}

impl ReleaseQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn jdk_version(mut self, jdk_version: impl Into<String>) -> Self {
        self.jdk_version = jdk_version.into();
        self
    }

    pub fn jvm_impl(mut self, jvm_impl: impl Into<String>) -> Self {
        self.jvm_impl = jvm_impl.into();
        self
    }

    pub fn os(mut self, os: impl Into<String>) -> Self {
        self.os = os.into();
        self
    }

    pub fn arch(mut self, arch: impl Into<String>) -> Self {
        self.arch = arch.into();
        self
    }

    pub fn release(mut self, release: impl Into<String>) -> Self {
        self.release = release.into();
        self
    }
}

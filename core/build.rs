// SPDX-FileCopyrightText: 2025 Leo <calprov@leo.dev>
//
// SPDX-License-Identifier: Apache-2.0

fn main() {
    // embedded by `sqlx::migrate!`, so edits must rebuild the crate
    println!("cargo:rerun-if-changed=src/localdb/migrations");
}

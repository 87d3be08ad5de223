// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

/// Does nothing. Called by the `empty_project` binary to show that it links
/// against code compiled into this library.
pub fn my_func() {}

// Copyright (c) The Art Tree Contributors
// SPDX-License-Identifier: Apache-2.0

mod leaf;
mod node;

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Rulecast-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Rulecast and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Rulecast: immutable catalogue trees and rule → profile conversion.
//!
//! - [`model`]: the document tree, `with_*` derivation and cursor navigation.
//! - [`catalog`]: listing convertible rules and target profile types.
//! - [`convert`]: the converter, its settings and batch conversion.
//! - [`store`]: loading and atomically saving datafiles.

pub mod catalog;
pub mod convert;
pub mod model;
pub mod store;

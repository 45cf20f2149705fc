// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Rulecast-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Rulecast and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Persistence for datafiles on disk.
//!
//! The store reads a datafile through a [`DatafileCodec`] and writes converted roots back over
//! the original file with an atomic temp-file + rename.

pub mod codec;
pub mod datafile;

pub use codec::{CodecError, DatafileCodec, JsonCodec};
pub use datafile::{Datafile, DatafileStore, StoreError, WriteDurability};

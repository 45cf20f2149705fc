// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Rulecast-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Rulecast and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{CatalogueBase, CatalogueKind};

/// Turns datafile bytes into a document root and back.
///
/// Encoding is kind-specific: a gamesystem and a catalogue with the same content encode
/// differently.
pub trait DatafileCodec: Send + Sync {
    fn decode(&self, bytes: &[u8]) -> Result<CatalogueBase, CodecError>;

    fn encode(&self, root: &CatalogueBase) -> Result<Vec<u8>, CodecError>;
}

#[derive(Debug)]
pub enum CodecError {
    Json(serde_json::Error),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(source) => write!(f, "json error: {source}"),
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(source) => Some(source),
        }
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(source: serde_json::Error) -> Self {
        Self::Json(source)
    }
}

/// JSON datafiles: `{"catalogue": {..}}` or `{"gamesystem": {..}}`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct JsonCodec {
    pretty: bool,
}

impl JsonCodec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
enum Envelope {
    Catalogue(CatalogueBase),
    Gamesystem(CatalogueBase),
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
enum EnvelopeRef<'a> {
    Catalogue(&'a CatalogueBase),
    Gamesystem(&'a CatalogueBase),
}

impl DatafileCodec for JsonCodec {
    fn decode(&self, bytes: &[u8]) -> Result<CatalogueBase, CodecError> {
        let root = match serde_json::from_slice::<Envelope>(bytes)? {
            Envelope::Catalogue(root) => root.with_kind(CatalogueKind::Catalogue),
            Envelope::Gamesystem(root) => root.with_kind(CatalogueKind::Gamesystem),
        };
        Ok(root)
    }

    fn encode(&self, root: &CatalogueBase) -> Result<Vec<u8>, CodecError> {
        let envelope = match root.kind() {
            CatalogueKind::Catalogue => EnvelopeRef::Catalogue(root),
            CatalogueKind::Gamesystem => EnvelopeRef::Gamesystem(root),
        };
        let mut bytes = if self.pretty {
            serde_json::to_vec_pretty(&envelope)?
        } else {
            serde_json::to_vec(&envelope)?
        };
        bytes.push(b'\n');
        Ok(bytes)
    }
}

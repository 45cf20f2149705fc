// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Rulecast-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Rulecast and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Converting several datafiles with one converter.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::store::Datafile;

use super::{Conversion, RuleConverter};

/// One datafile's conversion outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatafileConversion {
    path: PathBuf,
    conversion: Conversion,
}

impl DatafileConversion {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn name(&self) -> &str {
        self.conversion.root.name()
    }

    pub fn conversion(&self) -> &Conversion {
        &self.conversion
    }

    /// The converted document, ready to be written back over its source path.
    pub fn into_datafile(self) -> Datafile {
        Datafile::new(self.path, self.conversion.root)
    }
}

/// Converts every datafile in parallel.
///
/// Results are ordered by document name, then by path.
pub fn convert_datafiles(
    converter: &RuleConverter,
    datafiles: &[Datafile],
) -> Vec<DatafileConversion> {
    let mut results = datafiles
        .par_iter()
        .map(|datafile| DatafileConversion {
            path: datafile.path().to_path_buf(),
            conversion: converter.convert(datafile.root()),
        })
        .collect::<Vec<_>>();
    results.sort_by(|a, b| a.name().cmp(b.name()).then_with(|| a.path.cmp(&b.path)));

    for result in &results {
        for message in &result.conversion.messages {
            warn!(document = result.name(), "{message}");
        }
    }
    debug!(
        datafiles = results.len(),
        changed = results.iter().filter(|r| r.conversion.changed()).count(),
        "batch conversion finished"
    );

    results
}

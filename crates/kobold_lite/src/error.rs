// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Reasons a view could not be mounted in the document.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MountError {
    #[error("no global `window` exists")]
    NoWindow,
    #[error("`window` has no `document`")]
    NoDocument,
    #[error("`document` has no `body`")]
    NoBody,
    #[error("no element with id `{0}` in the document")]
    MissingMountPoint(String),
}

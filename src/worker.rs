// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Hotel staff and the factory that hires them by job label.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Kinds of staff the factory knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkerKind {
    Doorman,
    Maid,
    Chef,
}

impl WorkerKind {
    pub const ALL: [WorkerKind; 3] = [Self::Doorman, Self::Maid, Self::Chef];

    pub fn label(self) -> &'static str {
        match self {
            Self::Doorman => "DOORMAN",
            Self::Maid => "MAID",
            Self::Chef => "CHEF",
        }
    }
}

impl fmt::Display for WorkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a label names no known worker.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown worker type: {0:?}")]
pub struct UnknownWorker(pub String);

impl FromStr for WorkerKind {
    type Err = UnknownWorker;

    /// Case-insensitive, no trimming.
    fn from_str(label: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(label))
            .ok_or_else(|| UnknownWorker(label.to_string()))
    }
}

/// A member of the hotel staff.
pub trait HotelWorker {
    fn kind(&self) -> WorkerKind;

    /// What the worker does, as a console line.
    fn work(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Doorman;

impl HotelWorker for Doorman {
    fn kind(&self) -> WorkerKind {
        WorkerKind::Doorman
    }

    fn work(&self) -> &'static str {
        "Doorman is welcoming guests."
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Maid;

impl HotelWorker for Maid {
    fn kind(&self) -> WorkerKind {
        WorkerKind::Maid
    }

    fn work(&self) -> &'static str {
        "Maid is cleaning rooms."
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Chef;

impl HotelWorker for Chef {
    fn kind(&self) -> WorkerKind {
        WorkerKind::Chef
    }

    fn work(&self) -> &'static str {
        "Chef is preparing food."
    }
}

/// Creates workers from job labels.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkerFactory;

impl WorkerFactory {
    pub fn new() -> Self {
        Self
    }

    /// Returns the worker for `label`, matched case-insensitively against
    /// `DOORMAN`, `MAID` and `CHEF`.
    ///
    /// A missing or unrecognised label yields `None`.
    pub fn get_worker(&self, label: Option<&str>) -> Option<Box<dyn HotelWorker>> {
        let kind = label?.parse::<WorkerKind>().ok()?;
        Some(self.hire(kind))
    }

    pub fn hire(&self, kind: WorkerKind) -> Box<dyn HotelWorker> {
        match kind {
            WorkerKind::Doorman => Box::new(Doorman),
            WorkerKind::Maid => Box::new(Maid),
            WorkerKind::Chef => Box::new(Chef),
        }
    }
}

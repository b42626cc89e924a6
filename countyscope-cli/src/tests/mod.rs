//! Shared test harness modules for the countyscope CLI.

use super::*;

mod helpers;
mod unit;

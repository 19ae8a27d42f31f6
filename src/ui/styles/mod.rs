// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the overlay widgets.

pub mod overlay;

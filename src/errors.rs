// ABOUTME: Error types for the MacroSwap application crate
// ABOUTME: Re-exports the shared AppError, ErrorCode, and domain SwapError from macroswap-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroSwap Contributors

pub use macroswap_core::errors::{
    AppError, AppResult, ErrorCode, ErrorResponse, ErrorResponseDetails, SwapError,
};

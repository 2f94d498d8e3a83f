// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for goalpace-cli
// ABOUTME: Provides access to the report and goal editor commands

pub mod goal;
pub mod report;

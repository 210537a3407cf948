//! Spanfit Core Types and Definitions
//!
//! This crate provides the foundational types shared by the spanfit solver
//! and renderer. It includes:
//!
//! - **Semantic model**: Platforms, spans, element specifications and
//!   placement constraints ([`semantic`] module)
//! - **Errors**: Structural placement errors ([`error::PlacementError`])
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: Visual definitions for diagram elements ([`draw`] module)

pub mod color;
pub mod draw;
pub mod error;
pub mod geometry;
pub mod semantic;

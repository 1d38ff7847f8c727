//! Preview generation — pure Rust, zero external dependencies.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `image::image_dimensions` |
//! | **Fit math** | pure functions in [`calculations`] |
//! | **Resize → JPEG** | Lanczos3 + `image` JPEG encoder |
//!
//! The module is split into:
//! - **Calculations**: pure dimension math (unit testable, no I/O)
//! - **Parameters**: data structures describing a preview operation
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: high-level functions combining calculations + backend

pub mod backend;
pub mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use operations::{PreviewConfig, create_preview};
pub use params::{PreviewParams, Quality};
pub use rust_backend::RustBackend;

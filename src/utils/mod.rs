//! Utility functions shared by the decoration and stripping stages
//!
//! This module provides the glue under the pixel pipelines:
//! - Geometry (polygon construction, containment, signed distances)
//! - Raster helpers (decode, PNG/data-URL export, crop, resize)

pub mod geometry;
pub mod raster;

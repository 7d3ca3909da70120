//! Data module for retrieving satellite catalogs
//!
//! This module provides the catalog sources the pipeline reads TLE text from:
//! HTTP, a local file, or an in-memory stub.

mod downloader;

pub use downloader::{fetch_tle, CatalogSource, FileCatalog, HttpCatalog, StaticCatalog};

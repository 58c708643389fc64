//! Application layer: the view-sync controller and its services.

/// View-sync controller.
pub mod controller;
/// Data transfer objects.
pub mod dto;
/// Message display and renderers.
pub mod services;

pub use controller::ViewSyncController;

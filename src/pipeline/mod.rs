pub mod import;
pub mod extraction;
pub mod classify;
pub mod reconcile;

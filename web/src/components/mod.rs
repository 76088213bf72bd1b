pub mod error;
pub mod loading;
pub mod navbar;

// Re-export commonly used types
pub use loading::LoadingScreen;
pub use navbar::Navbar;

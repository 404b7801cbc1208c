//! Application Layer

pub mod list_modules;
pub mod view_module;

// Re-exports
pub use list_modules::ListModulesUseCase;
pub use view_module::ViewModuleUseCase;

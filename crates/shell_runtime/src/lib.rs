pub mod apps;
pub mod components;
pub mod model;
pub mod reducer;
pub mod registry;

mod effect_executor;
mod runtime_context;

pub use components::{DesktopShell, ShellProvider, ShellRuntimeContext, WindowControls};
pub use model::*;
pub use reducer::{reduce_shell, ReducerError, RuntimeEffect, ShellAction};
pub use runtime_context::use_shell_runtime;

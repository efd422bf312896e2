//! Description templates — static tables plus a positional renderer whose
//! arguments come from the inversion graph.

pub mod opstack;
pub mod renderer;
pub mod types;

pub use renderer::{format_positional, TemplateRenderer};
pub use types::{ArgumentSource, ContractDescriptionTemplate, PermissionTemplate, ValueSource};

//! Constructible services
//!
//! Types the object graph instantiates on demand from bindings already
//! declared, instead of receiving a pre-built instance from the host.

mod add_template_action;
mod ignore_manager;

pub use add_template_action::AddTemplateAction;
pub use ignore_manager::IgnoreManager;
